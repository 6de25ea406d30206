//! Values and their textual operand form.

use std::fmt::{self, Write as _};

use crate::IrType;

/// A value in the module arena.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueData {
    pub ty: IrType,
    pub kind: ValueKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    ConstInt(i64),
    ConstFloat(f64),
    Null,
    /// A named local register or parameter (`%name`).
    Register(String),
    /// A global symbol (`@name`); its type is a pointer to the storage.
    Global(String),
    /// Constant `getelementptr` to the first byte of a string global.
    StringRef { global: String, len: u32 },
}

impl ValueData {
    pub(crate) fn new(ty: IrType, kind: ValueKind) -> Self {
        ValueData { ty, kind }
    }

    pub fn is_constant(&self) -> bool {
        matches!(
            self.kind,
            ValueKind::ConstInt(_)
                | ValueKind::ConstFloat(_)
                | ValueKind::Null
                | ValueKind::StringRef { .. }
        )
    }

    /// `ty operand`, as written in argument and operand lists.
    pub fn typed(&self) -> String {
        format!("{} {self}", self.ty)
    }
}

/// The bare operand text.
impl fmt::Display for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::ConstInt(v) => write!(f, "{v}"),
            ValueKind::ConstFloat(v) => f.write_str(&format_double(*v)),
            ValueKind::Null => f.write_str("null"),
            ValueKind::Register(name) => write!(f, "%{name}"),
            ValueKind::Global(name) => write!(f, "@{name}"),
            ValueKind::StringRef { global, len } => write!(
                f,
                "getelementptr inbounds ([{len} x i8], [{len} x i8]* @{global}, i64 0, i64 0)"
            ),
        }
    }
}

/// Render a double the way the LLVM 10 assembler accepts it.
///
/// Integral values print as `N.0`; everything else uses the exact
/// hexadecimal bit pattern.
pub fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("0x{:016X}", value.to_bits())
    }
}

/// Escape bytes for a `c"..."` string constant.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if (b.is_ascii_graphic() && b != b'"' && b != b'\\') || b == b' ' {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "\\{b:02X}");
        }
    }
    out
}

#[cfg(test)]
mod tests;
