use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("malformed record set: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown mount point `{0}`")]
    UnknownMountPoint(String),

    #[error("mount point `{0}` is already bound")]
    MountPointOccupied(String),
}
