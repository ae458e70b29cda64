use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WsrError>;

#[derive(Error, Debug)]
pub enum WsrError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid week start: {0} is not a Monday")]
    InvalidWeekStart(NaiveDate),
    #[error("Workspace not found: {}", .0.display())]
    WorkspaceNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for WsrError {
    fn from(err: gix::open::Error) -> Self {
        WsrError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for WsrError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        WsrError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for WsrError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        WsrError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for WsrError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        WsrError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for WsrError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        WsrError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for WsrError {
    fn from(err: gix::object::commit::Error) -> Self {
        WsrError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for WsrError {
    fn from(err: gix::objs::decode::Error) -> Self {
        WsrError::ObjectDecode(Box::new(err))
    }
}
