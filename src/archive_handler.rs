use std::fs::File;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;
use crate::dependency::Dependency;
use crate::error::{ Error, Result };
use crate::filename_parser::parse_dependency_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Jar,
    War,
}

impl ArchiveKind {
    /// Determine the archive kind from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".jar") {
            Ok(ArchiveKind::Jar)
        } else if name.ends_with(".war") {
            Ok(ArchiveKind::War)
        } else {
            Err(Error::UnsupportedExtension(name.to_string()))
        }
    }

    /// Directories that hold bundled libraries for this kind of archive
    pub fn library_prefixes(&self) -> &'static [&'static str] {
        match self {
            ArchiveKind::Jar => &["BOOT-INF/lib/"],
            ArchiveKind::War => &["WEB-INF/lib/", "WEB-INF/lib-provided/"],
        }
    }

    pub fn is_library_entry(&self, name: &str) -> bool {
        name.ends_with(".jar") &&
            self
                .library_prefixes()
                .iter()
                .any(|prefix| name.starts_with(prefix))
    }
}

/// Parse every bundled library among `names`, keeping archive order
pub fn select_library_entries<'a, I>(kind: ArchiveKind, names: I) -> Vec<Dependency>
    where I: IntoIterator<Item = &'a str>
{
    names
        .into_iter()
        .filter(|name| kind.is_library_entry(name))
        .map(parse_dependency_filename)
        .collect()
}

pub struct ArchiveHandler {
    kind: ArchiveKind,
    archive: ZipArchive<File>,
}

impl ArchiveHandler {
    /// Open a jar or war file. The extension is checked before the file is touched.
    pub fn open(path: &Path) -> Result<Self> {
        let kind = ArchiveKind::from_path(path)?;
        let file = File::open(path)?;
        let archive = ZipArchive::new(file)?;

        debug!(path = %path.display(), ?kind, entries = archive.len(), "opened archive");

        Ok(ArchiveHandler { kind, archive })
    }

    pub fn kind(&self) -> ArchiveKind {
        self.kind
    }

    /// Entry names in central directory order
    pub fn entry_names(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            // Raw access skips setting up decompression
            let entry = self.archive.by_index_raw(i)?;
            names.push(entry.name().to_string());
        }
        Ok(names)
    }

    /// Bundled library dependencies found in the archive
    pub fn dependencies(&mut self) -> Result<Vec<Dependency>> {
        let names = self.entry_names()?;
        let dependencies = select_library_entries(
            self.kind(),
            names.iter().map(String::as_str)
        );

        debug!(count = dependencies.len(), "selected library entries");

        Ok(dependencies)
    }
}

/// Open an archive and list its bundled library dependencies
pub fn extract_dependencies(path: &Path) -> Result<Vec<Dependency>> {
    let mut handler = ArchiveHandler::open(path)?;
    handler.dependencies()
}
