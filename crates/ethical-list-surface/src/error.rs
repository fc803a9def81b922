use ethical_list_core::{BindError, ReuseIdentifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    UnregisteredKind(ReuseIdentifier),
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::UnregisteredKind(kind) => {
                write!(f, "no slot kind registered for identifier {kind}")
            }
        }
    }
}

impl std::error::Error for PoolError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    Bind(BindError),
    Pool(PoolError),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::Bind(err) => write!(f, "bind failed: {err}"),
            SurfaceError::Pool(err) => write!(f, "slot pool: {err}"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::Bind(err) => Some(err),
            SurfaceError::Pool(err) => Some(err),
        }
    }
}

impl From<BindError> for SurfaceError {
    fn from(err: BindError) -> Self {
        SurfaceError::Bind(err)
    }
}

impl From<PoolError> for SurfaceError {
    fn from(err: PoolError) -> Self {
        SurfaceError::Pool(err)
    }
}
