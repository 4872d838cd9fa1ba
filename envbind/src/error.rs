//! Error types for configuration binding

/// Reasons a duration literal fails to parse.
///
/// Carried as the source of [`BindError::ParseDuration`]. The accepted
/// grammar is one or more `<count><unit>` groups with units `ns`, `us`,
/// `µs`, `ms`, `s`, `m`, `h`, or a bare unsigned integer counted in
/// nanoseconds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// The literal is empty.
    #[error("empty duration literal")]
    Empty,

    /// Negative durations are not representable.
    #[error("duration must not be negative")]
    Negative,

    /// A unit appears with no count in front of it (e.g. `"s"`).
    #[error("missing count before unit")]
    MissingCount,

    /// A count appears with no unit after it (e.g. `"1.5"`).
    #[error("missing unit after count")]
    MissingUnit,

    /// An unrecognized unit symbol.
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    /// The literal exceeds the representable nanosecond range.
    #[error("duration out of range")]
    OutOfRange,
}

/// Errors that can occur while binding configuration onto a record.
///
/// Each parse variant names the source key and carries the offending value
/// so callers can format their own messages. The binder performs no retries
/// and no rollback; the first failure aborts the pass and is returned
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The value is not one of the recognized boolean literals
    /// (`1`, `t`, `T`, `true`, `TRUE`, `True` and the matching false forms).
    #[error("variable '{key}': '{value}' is not a valid boolean")]
    ParseBool {
        /// Source key the value was looked up under
        key: String,
        /// The rejected value
        value: String,
    },

    /// The value is not a base-10 signed integer, or overflows `i64`.
    #[error("variable '{key}': '{value}' is not a valid integer")]
    ParseInt {
        /// Source key the value was looked up under
        key: String,
        /// The rejected value
        value: String,
        /// Underlying parse failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// The value does not parse under the duration grammar.
    #[error("variable '{key}': '{value}' is not a valid duration")]
    ParseDuration {
        /// Source key the value was looked up under
        key: String,
        /// The rejected value
        value: String,
        /// Which grammar rule the literal violated
        #[source]
        source: DurationError,
    },

    /// The field's declared type is outside the supported set
    /// (`String`, `bool`, `i64`, `std::time::Duration`).
    #[error("variable '{key}': unsupported field type '{declared_type}'")]
    UnsupportedKind {
        /// Source key the field is annotated with
        key: String,
        /// The declared type, as written on the field
        declared_type: String,
    },

    /// Loading a `.env` file failed for a reason other than the file being
    /// absent. Only produced by
    /// [`Binder::from_dotenv`](crate::Binder::from_dotenv), never by a
    /// binding pass.
    #[error("failed to load .env file")]
    Dotenv(#[source] dotenvy::Error),
}
