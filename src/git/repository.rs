use crate::error::Result;
use crate::git::Vcs;
use git2::Repository;
use std::path::Path;

/// Real implementation of [Vcs] backed by the `git2` crate.
///
/// Works on the repository containing the current working directory, the way
/// the tool is normally run from a project root.
pub struct Git2Repository {
    repo: Repository,
}

impl Git2Repository {
    /// Discovers the git repository in the current directory or parent
    /// directories.
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(Git2Repository { repo })
    }

    /// Opens the repository at a specific path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2Repository { repo })
    }
}

impl Vcs for Git2Repository {
    fn stage_files(&self, paths: &[&str]) -> Result<()> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(Path::new(path))?;
        }
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;
        let signature = self.repo.signature()?;
        let head = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&head],
        )?;
        Ok(())
    }

    fn tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.tag_lightweight(name, head.as_object(), false)?;
        Ok(())
    }
}
