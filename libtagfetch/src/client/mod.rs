//! Registry tag listing.
//!
//! Registries are never contacted directly: the [`Skopeo`] client runs
//! `skopeo list-tags` anonymously and parses its JSON answer. Anything that
//! can list tags for a (registry, image) pair can stand in for it through
//! the [`RegistryClient`] trait.

use crate::error::{Result, TagFetchError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};


/// Name of the external tool used to list tags.
pub const SKOPEO: &str = "skopeo";

/// How the tool is named in messages meant for people.
const SKOPEO_DISPLAY_NAME: &str = "Skopeo";

/// Lists the tags of an image.
pub trait RegistryClient {
    /// Returns every tag of `image` on `registry`, in the order the registry
    /// reported them. An image without tags yields an empty list.
    fn list_tags(&self, registry: &str, image: &str) -> Result<Vec<String>>;
}

impl<C: RegistryClient + ?Sized> RegistryClient for &C {
    fn list_tags(&self, registry: &str, image: &str) -> Result<Vec<String>> {
        (**self).list_tags(registry, image)
    }
}

/// Transport reference understood by skopeo for a registry image.
///
/// # Examples
///
/// ```
/// use libtagfetch::client::image_url;
///
/// assert_eq!(
///     image_url("localhost:5000", "team/app"),
///     "docker://localhost:5000/team/app"
/// );
/// ```
pub fn image_url(registry: &str, image: &str) -> String {
    format!("docker://{}/{}", registry, image)
}

/// Shape of `skopeo list-tags` output.
#[derive(Debug, Deserialize)]
struct ListTagsOutput {
    #[serde(rename = "Tags", default)]
    tags: Option<Vec<String>>,
}

/// Extracts the tag list from `skopeo list-tags` output.
///
/// A missing or `null` `Tags` key means the image has no tags.
pub fn parse_list_tags(stdout: &str) -> Result<Vec<String>> {
    let output: ListTagsOutput = serde_json::from_str(stdout).map_err(|e| {
        TagFetchError::fetch_with_source(format!("unexpected output from {}: {}", SKOPEO, e), e)
    })?;
    Ok(output.tags.unwrap_or_default())
}

/// Lists tags by running `skopeo list-tags --no-creds`.
#[derive(Debug, Clone)]
pub struct Skopeo {
    program: PathBuf,
    prefix_args: Vec<String>,
}

impl Skopeo {
    /// Finds skopeo on `PATH`.
    ///
    /// # Errors
    /// Returns [`TagFetchError::ToolNotFound`] if skopeo is not installed.
    pub fn locate() -> Result<Self> {
        Self::locate_program(SKOPEO)
    }

    fn locate_program(name: &str) -> Result<Self> {
        let program = which::which(name)
            .map_err(|e| TagFetchError::tool_not_found_with_source(SKOPEO_DISPLAY_NAME, e))?;

        debug!("Found {} at: {:?}", name, program);

        Ok(Self::with_program(program))
    }

    /// Uses the given skopeo binary.
    pub fn with_program<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
        }
    }

    /// Runs skopeo through a wrapper command.
    ///
    /// `args` are passed to `program` before the skopeo arguments, e.g.
    /// `podman` with `["run", "--rm", "quay.io/skopeo/stable"]`.
    #[cfg(test)]
    pub fn with_wrapper<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            prefix_args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Path of the program that is executed.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, registry: &str, image: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.prefix_args)
            .arg("list-tags")
            .arg("--no-creds")
            .arg(image_url(registry, image));
        cmd
    }
}

impl RegistryClient for Skopeo {
    fn list_tags(&self, registry: &str, image: &str) -> Result<Vec<String>> {
        let mut cmd = self.command(registry, image);

        trace!("Running: {:?}", cmd);

        let output = cmd.output().map_err(|e| {
            TagFetchError::fetch_with_source(
                format!("failed to execute {}: {}", self.program.display(), e),
                e,
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                "{} exited with {} for {}/{}",
                SKOPEO, output.status, registry, image
            );
            return Err(TagFetchError::fetch(
                stderr.trim_end().to_string(),
                output.status.code(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tags = parse_list_tags(&stdout)?;

        debug!("Fetched {} tags for {}/{}", tags.len(), registry, image);

        Ok(tags)
    }
}
