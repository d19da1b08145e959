//! Layout validation errors.

use thiserror::Error;

/// Errors raised while deriving attribute descriptors from a vertex record.
///
/// Every variant points at a mismatch between the declared record type and
/// the binding request, so they are programming errors rather than runtime
/// conditions. They are returned instead of panicking so the caller decides
/// how loudly to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The vertex type is neither an array nor a record.
    #[error("vertex type `{record}` cannot back a vertex: only arrays and structs can")]
    UnsupportedRecordShape { record: String },

    /// A scalar or array element type cannot be bound as an attribute.
    ///
    /// This covers a bare field of an unsupported primitive (`usize`, `i64`,
    /// `bool`) as well: the field's shape is fine, its primitive is not, so
    /// it is reported here rather than as [`UnsupportedFieldShape`].
    ///
    /// `field` names the field, or the vertex type itself for array-backed
    /// records.
    ///
    /// [`UnsupportedFieldShape`]: LayoutError::UnsupportedFieldShape
    #[error("`{field}` uses `{found}`, which is not a supported vertex primitive")]
    UnsupportedPrimitiveType { field: String, found: String },

    /// A binding names a field the record does not have.
    #[error("struct `{record}` has no field named `{field}`")]
    UnknownField { record: String, field: String },

    /// A nested record field declares no members.
    #[error("field `{field}` is the empty struct `{aggregate}`")]
    EmptyAggregate { field: String, aggregate: String },

    /// A nested record field mixes member types.
    #[error(
        "field `{field}`: member `{member}` of `{aggregate}` is `{found}`, \
         but every member must be `{expected}`"
    )]
    HeterogeneousAggregate {
        field: String,
        aggregate: String,
        member: String,
        expected: String,
        found: String,
    },

    /// A field is neither a primitive, a primitive array, nor a record of
    /// one primitive type.
    #[error("field `{field}` has unsupported shape `{found}`")]
    UnsupportedFieldShape { field: String, found: String },
}

/// Fieldless mirror of [`LayoutError`] for matching on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutErrorKind {
    UnsupportedRecordShape,
    UnsupportedPrimitiveType,
    UnknownField,
    EmptyAggregate,
    HeterogeneousAggregate,
    UnsupportedFieldShape,
}

impl LayoutError {
    /// The failure class of this error.
    pub fn kind(&self) -> LayoutErrorKind {
        match self {
            Self::UnsupportedRecordShape { .. } => LayoutErrorKind::UnsupportedRecordShape,
            Self::UnsupportedPrimitiveType { .. } => LayoutErrorKind::UnsupportedPrimitiveType,
            Self::UnknownField { .. } => LayoutErrorKind::UnknownField,
            Self::EmptyAggregate { .. } => LayoutErrorKind::EmptyAggregate,
            Self::HeterogeneousAggregate { .. } => LayoutErrorKind::HeterogeneousAggregate,
            Self::UnsupportedFieldShape { .. } => LayoutErrorKind::UnsupportedFieldShape,
        }
    }
}

/// Result alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::UnknownField {
            record: "Vertex".to_string(),
            field: "normal".to_string(),
        };
        assert_eq!(err.to_string(), "struct `Vertex` has no field named `normal`");
        assert_eq!(err.kind(), LayoutErrorKind::UnknownField);

        let err = LayoutError::HeterogeneousAggregate {
            field: "position".to_string(),
            aggregate: "Mixed".to_string(),
            member: "y".to_string(),
            expected: "f32".to_string(),
            found: "u8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field `position`: member `y` of `Mixed` is `u8`, but every member must be `f32`"
        );
    }

    #[test]
    fn test_error_kind() {
        let err = LayoutError::UnsupportedRecordShape {
            record: "f32".to_string(),
        };
        assert_eq!(err.kind(), LayoutErrorKind::UnsupportedRecordShape);
        assert!(err.to_string().contains("only arrays and structs"));
    }
}
