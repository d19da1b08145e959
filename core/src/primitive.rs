//! Scalar kinds and the GPU element types they map to.
//!
//! Every scalar that can appear in a vertex record has a [`ScalarKind`].
//! Only eight of them can be handed to the GPU directly; those map to an
//! [`ElementType`]. The rest are recognised so that they can be rejected
//! with a precise error instead of silently producing a wrong layout.

use std::fmt;

/// Component type of a vertex attribute as understood by the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Signed 8-bit integer (`GL_BYTE`).
    Byte,
    /// Unsigned 8-bit integer (`GL_UNSIGNED_BYTE`).
    UnsignedByte,
    /// Signed 16-bit integer (`GL_SHORT`).
    Short,
    /// Unsigned 16-bit integer (`GL_UNSIGNED_SHORT`).
    UnsignedShort,
    /// Signed 32-bit integer (`GL_INT`).
    Int,
    /// Unsigned 32-bit integer (`GL_UNSIGNED_INT`).
    UnsignedInt,
    /// 32-bit float (`GL_FLOAT`).
    Float,
    /// 64-bit float (`GL_DOUBLE`).
    Double,
}

impl ElementType {
    /// All element types, in OpenGL enum order.
    pub const ALL: [Self; 8] = [
        Self::Byte,
        Self::UnsignedByte,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Float,
        Self::Double,
    ];

    /// The OpenGL enum value for this type.
    pub fn gl_enum(&self) -> u32 {
        match self {
            Self::Byte => 0x1400,
            Self::UnsignedByte => 0x1401,
            Self::Short => 0x1402,
            Self::UnsignedShort => 0x1403,
            Self::Int => 0x1404,
            Self::UnsignedInt => 0x1405,
            Self::Float => 0x1406,
            Self::Double => 0x140A,
        }
    }

    /// Size in bytes of one component.
    pub fn size(&self) -> usize {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort => 2,
            Self::Int | Self::UnsignedInt | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// Whether the GPU reads this type as an integer (before normalization).
    pub fn is_integer(&self) -> bool {
        !matches!(self, Self::Float | Self::Double)
    }

    /// Upper-case name matching the OpenGL constant without its `GL_` prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Byte => "BYTE",
            Self::UnsignedByte => "UNSIGNED_BYTE",
            Self::Short => "SHORT",
            Self::UnsignedShort => "UNSIGNED_SHORT",
            Self::Int => "INT",
            Self::UnsignedInt => "UNSIGNED_INT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a scalar value stored in a vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
    // Not bindable as vertex attributes.
    I64,
    U64,
    I128,
    U128,
    Isize,
    Usize,
    Bool,
    Char,
}

impl ScalarKind {
    /// Map this scalar to its GPU element type.
    ///
    /// Returns `None` for kinds that cannot be bound directly
    /// (pointer-sized and 64/128-bit integers, `bool`, `char`).
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            Self::I8 => Some(ElementType::Byte),
            Self::U8 => Some(ElementType::UnsignedByte),
            Self::I16 => Some(ElementType::Short),
            Self::U16 => Some(ElementType::UnsignedShort),
            Self::I32 => Some(ElementType::Int),
            Self::U32 => Some(ElementType::UnsignedInt),
            Self::F32 => Some(ElementType::Float),
            Self::F64 => Some(ElementType::Double),
            Self::I64
            | Self::U64
            | Self::I128
            | Self::U128
            | Self::Isize
            | Self::Usize
            | Self::Bool
            | Self::Char => None,
        }
    }

    /// Whether this scalar can back a vertex attribute.
    pub fn is_supported(&self) -> bool {
        self.element_type().is_some()
    }

    /// Size in bytes of one value of this kind.
    pub fn size(&self) -> usize {
        match self {
            Self::I8 | Self::U8 | Self::Bool => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 | Self::Char => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
            Self::I128 | Self::U128 => 16,
            Self::Isize | Self::Usize => std::mem::size_of::<usize>(),
        }
    }

    /// The Rust spelling of the type.
    pub fn rust_name(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::I128 => "i128",
            Self::U128 => "u128",
            Self::Isize => "isize",
            Self::Usize => "usize",
            Self::Bool => "bool",
            Self::Char => "char",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}
