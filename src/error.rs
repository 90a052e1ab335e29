use thiserror::Error;

/// Errors surfaced while building or realising an element tree.
///
/// Realisation itself is best-effort: malformed structures realise to
/// whatever their well-formed parts produce. The only hard failure is
/// asking the factory for an element kind it does not know how to build.
#[derive(Debug, Error)]
pub enum RealiseError {
    #[error("cannot create an element of category {category:?} from {input:?}")]
    InvalidElement { category: String, input: String },
}
