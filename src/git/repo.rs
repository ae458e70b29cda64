use crate::error::{Result, WsrError};
use crate::model::{AuthorIdentity, CommitInfo};
use chrono::DateTime;
use gix::{ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Classify and open `path`: `Ok(Some(_))` for a working copy,
    /// `Ok(None)` when it is not a repository. Any other probe failure
    /// propagates. Opens exactly `path` rather than discovering upward, so
    /// a plain directory inside some larger checkout stays classified as
    /// "not a repository".
    pub fn try_open(path: &Path) -> Result<Option<Self>> {
        match gix::open(path) {
            Ok(repo) => {
                let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
                Ok(Some(Self { repo, path }))
            }
            Err(gix::open::Error::NotARepository { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// The identity configured for this repository, from its resolved git
    /// config. Missing or empty `user.email` / `user.name` values come back
    /// as `None`, which downgrades commit matching to "no filter".
    pub fn resolve_identity(&self) -> AuthorIdentity {
        let config = self.repo.config_snapshot();
        let email = config
            .string("user.email")
            .map(|v| v.to_string())
            .filter(|v| !v.is_empty());
        let name = config
            .string("user.name")
            .map(|v| v.to_string())
            .filter(|v| !v.is_empty());
        AuthorIdentity { email, name }
    }

    /// Walk the full history reachable from `HEAD` and return one record per
    /// commit, subject line only.
    ///
    /// Records come back in traversal order: depth-first from `HEAD` over
    /// parents, so the newest commit on the current branch is first. Callers
    /// that take "the first" match for a day rely on this order; it is never
    /// re-sorted here. An unborn `HEAD` (no commits yet) yields an empty
    /// history.
    pub fn collect_commits(&self) -> Result<Vec<CommitInfo>> {
        let mut head = self.repo.head()?;
        if matches!(head.kind, gix::head::Kind::Unborn { .. }) {
            return Ok(Vec::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading history: {}", self.name()));

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| WsrError::InvalidDate(format!("Invalid timestamp: {secs}")))?;

            let author = commit.author()?;
            commits.push(CommitInfo {
                id: commit_id.to_string(),
                author_name: author.name.to_string(),
                author_email: author.email.to_string(),
                message: commit.message()?.title.to_string(),
                timestamp,
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(commits)
    }
}
