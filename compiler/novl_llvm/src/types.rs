//! IR types (LLVM 10 typed pointers).

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IrType {
    Void,
    I1,
    I8,
    I32,
    F64,
    Ptr(Box<IrType>),
    Array(u32, Box<IrType>),
}

impl IrType {
    /// `i8*`, the string type.
    pub fn i8_ptr() -> Self {
        IrType::Ptr(Box::new(IrType::I8))
    }

    pub fn ptr_to(self) -> Self {
        IrType::Ptr(Box::new(self))
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, IrType::I1 | IrType::I8 | IrType::I32)
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, IrType::F64)
    }

    #[inline]
    pub fn is_ptr(&self) -> bool {
        matches!(self, IrType::Ptr(_))
    }

    pub fn pointee(&self) -> Option<&IrType> {
        match self {
            IrType::Ptr(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::Void => write!(f, "void"),
            IrType::I1 => write!(f, "i1"),
            IrType::I8 => write!(f, "i8"),
            IrType::I32 => write!(f, "i32"),
            IrType::F64 => write!(f, "double"),
            IrType::Ptr(inner) => write!(f, "{inner}*"),
            IrType::Array(len, inner) => write!(f, "[{len} x {inner}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IrType;

    #[test]
    fn display() {
        assert_eq!(IrType::i8_ptr().to_string(), "i8*");
        assert_eq!(IrType::F64.ptr_to().to_string(), "double*");
        assert_eq!(
            IrType::Array(4, Box::new(IrType::I8)).to_string(),
            "[4 x i8]"
        );
    }

    #[test]
    fn classification() {
        assert!(IrType::I32.is_int());
        assert!(IrType::I1.is_int());
        assert!(!IrType::F64.is_int());
        assert!(IrType::F64.is_float());
        assert_eq!(IrType::i8_ptr().pointee(), Some(&IrType::I8));
    }
}
