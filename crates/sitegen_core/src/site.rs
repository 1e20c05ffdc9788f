use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::error::ConvertError;
use crate::page::{PageError, extract_title, render_page};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("directory {} not found", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to convert {}: {source}", .path.display())]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },

    #[error("failed to render {}: {source}", .path.display())]
    Page { path: PathBuf, source: PageError },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Counts from a finished build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub static_files: usize,
}

/// A site on disk: markdown sources, static assets, a page template and the
/// directory everything is written to.
#[derive(Debug, Clone)]
pub struct Site {
    pub content: PathBuf,
    pub static_dir: PathBuf,
    pub output: PathBuf,
    pub template: PathBuf,
    pub base_path: String,
}

impl Site {
    pub fn from_config(config: &Config) -> Self {
        Self {
            content: config.paths.content.clone(),
            static_dir: config.paths.static_dir.clone(),
            output: config.paths.output.clone(),
            template: config.paths.template.clone(),
            base_path: config.site.base_path.clone(),
        }
    }

    /// Rebuild the output directory from scratch.
    pub fn build(&self) -> Result<BuildReport, SiteError> {
        let static_files = self.copy_static()?;
        let pages = self.generate_pages()?;
        Ok(BuildReport {
            pages,
            static_files,
        })
    }

    /// Clear the output directory and mirror the static tree into it.
    /// Returns the number of files copied.
    pub fn copy_static(&self) -> Result<usize, SiteError> {
        if !self.static_dir.is_dir() {
            return Err(SiteError::MissingDirectory {
                path: self.static_dir.clone(),
            });
        }

        if self.output.exists() {
            log::debug!("Removing {}", self.output.display());
            fs::remove_dir_all(&self.output).map_err(io_error(&self.output))?;
        }
        fs::create_dir_all(&self.output).map_err(io_error(&self.output))?;

        copy_tree(&self.static_dir, &self.output)
    }

    /// Render every `.md` file under the content directory. Returns the
    /// number of pages written.
    pub fn generate_pages(&self) -> Result<usize, SiteError> {
        if !self.content.is_dir() {
            return Err(SiteError::MissingDirectory {
                path: self.content.clone(),
            });
        }

        let template = fs::read_to_string(&self.template).map_err(io_error(&self.template))?;
        self.generate_pages_in(&self.content, &self.output, &template)
    }

    fn generate_pages_in(
        &self,
        content_dir: &Path,
        dest_dir: &Path,
        template: &str,
    ) -> Result<usize, SiteError> {
        let mut pages = 0;
        for path in sorted_entries(content_dir)? {
            let Some(name) = path.file_name() else {
                continue;
            };
            if path.is_dir() {
                pages += self.generate_pages_in(&path, &dest_dir.join(name), template)?;
            } else if path.extension().is_some_and(|ext| ext == "md") {
                let dest = dest_dir.join(name).with_extension("html");
                self.generate_page(&path, template, &dest)?;
                pages += 1;
            } else {
                log::debug!("Skipping non-markdown file {}", path.display());
            }
        }
        Ok(pages)
    }

    /// Render a single markdown file through the template into `dest`.
    pub fn generate_page(&self, from: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
        log::info!("Generating page from {} to {}", from.display(), dest.display());

        let markdown = fs::read_to_string(from).map_err(io_error(from))?;
        let content = crate::markdown_to_html(&markdown).map_err(|source| SiteError::Convert {
            path: from.to_path_buf(),
            source,
        })?;
        let title = extract_title(&markdown).map_err(|source| SiteError::Page {
            path: from.to_path_buf(),
            source,
        })?;
        let page = render_page(template, title, &content, &self.base_path);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        fs::write(dest, page).map_err(io_error(dest))
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(dir))?;
    entries.sort();
    Ok(entries)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);
        if path.is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
            copied += copy_tree(&path, &target)?;
        } else {
            log::debug!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(io_error(&path))?;
            copied += 1;
        }
    }
    Ok(copied)
}
