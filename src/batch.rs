// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mapping of input files and folders to conversion jobs.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A single file conversion.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Job {
    /// An SVG file to read.
    pub input: PathBuf,
    /// A Vector Drawable file to write.
    pub output: PathBuf,
}

/// List of planning errors.
///
/// `Display` produces the message shown to the user.
#[derive(Debug)]
pub enum PlanError {
    /// The input folder has no `*.svg` files.
    NoSvgFiles(PathBuf),

    /// The input folder is a file.
    FolderIsAFile(PathBuf),

    /// The input folder doesn't exist.
    FolderNotFound(PathBuf),

    /// The input file is a folder.
    InputIsAFolder(PathBuf),

    /// The input file doesn't exist.
    InputNotFound(PathBuf),

    /// A single input was mapped to an output without the `.xml` extension.
    OutputMustBeXml,

    /// Multiple inputs were mapped to an output with an extension.
    OutputMustBeFolder,

    /// The input folder cannot be listed.
    ReadDirFailed(PathBuf, io::Error),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            PlanError::NoSvgFiles(ref path) => {
                write!(f, "Folder \"{}\" has not any SVG file.", path.display())
            }
            PlanError::FolderIsAFile(ref path) => {
                write!(f, "File \"{}\" must be a folder.", path.display())
            }
            PlanError::FolderNotFound(ref path) => {
                write!(f, "Folder \"{}\" is not exists.", path.display())
            }
            PlanError::InputIsAFolder(ref path) => {
                write!(f, "File \"{}\" must be a file.", path.display())
            }
            PlanError::InputNotFound(ref path) => {
                write!(f, "File \"{}\" is not exists.", path.display())
            }
            PlanError::OutputMustBeXml => {
                write!(f, "Output must be a XML file.")
            }
            PlanError::OutputMustBeFolder => {
                write!(f, "Output must be a folder.")
            }
            PlanError::ReadDirFailed(ref path, ref e) => {
                write!(f, "Failed to read folder \"{}\" cause {}.", path.display(), e)
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// Builds a list of conversion jobs.
///
/// `folder` contributes all of its `*.svg` files, `input` a single file.
/// When `output` is not set, it defaults to `folder` or
/// to the `input` file directory.
///
/// An empty list is returned when neither `folder` nor `input` are set.
pub fn plan(
    folder: Option<&Path>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<Vec<Job>, PlanError> {
    let mut files = Vec::new();
    let mut default_output = None;

    if let Some(folder) = folder {
        if folder.is_dir() {
            files = collect_svg_files(folder)?;
            if files.is_empty() {
                return Err(PlanError::NoSvgFiles(folder.to_path_buf()));
            }
        } else if folder.is_file() {
            return Err(PlanError::FolderIsAFile(folder.to_path_buf()));
        } else {
            return Err(PlanError::FolderNotFound(folder.to_path_buf()));
        }

        default_output = Some(folder.to_path_buf());
    }

    if let Some(input) = input {
        if input.is_file() {
            if !files.iter().any(|f| f == input) {
                files.push(input.to_path_buf());
            }
        } else if input.is_dir() {
            return Err(PlanError::InputIsAFolder(input.to_path_buf()));
        } else {
            return Err(PlanError::InputNotFound(input.to_path_buf()));
        }

        if default_output.is_none() {
            default_output = Some(input.parent().unwrap_or(Path::new("")).to_path_buf());
        }
    }

    let output = match (output, default_output) {
        (Some(output), _) => {
            // A single file given via `--input` must go into a file.
            // A defaulted output is a folder and is not checked.
            if files.len() == 1 && folder.is_none() && !is_xml_file(output) {
                return Err(PlanError::OutputMustBeXml);
            }

            output.to_path_buf()
        }
        (None, Some(output)) => output,
        (None, None) => return Ok(Vec::new()),
    };

    if files.len() > 1 && has_extension(&output) {
        return Err(PlanError::OutputMustBeFolder);
    }

    let jobs = files
        .into_iter()
        .map(|input| {
            let output = if is_xml_file(&output) {
                output.clone()
            } else {
                output.join(xml_file_name(&input))
            };

            Job { input, output }
        })
        .collect();

    Ok(jobs)
}

/// Returns an output path for a converted SVG string.
///
/// The `.xml` extension is appended when missing.
pub fn string_output(output: &Path) -> PathBuf {
    if is_xml_file(output) {
        output.to_path_buf()
    } else {
        let mut path = OsString::from(output.as_os_str());
        path.push(".xml");
        PathBuf::from(path)
    }
}

/// Writes a file, creating its directory first when needed.
pub fn output_file(path: &Path, content: &str) -> Result<(), io::Error> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            log::debug!("Creating '{}'.", dir.display());
            fs::create_dir_all(dir)?;
        }
    }

    fs::write(path, content)
}

fn collect_svg_files(folder: &Path) -> Result<Vec<PathBuf>, PlanError> {
    let read_err = |e| PlanError::ReadDirFailed(folder.to_path_buf(), e);

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && has_svg_extension(&path) {
            files.push(path);
        }
    }

    // `read_dir` order is platform-specific.
    files.sort();
    Ok(files)
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"))
}

fn is_xml_file(path: &Path) -> bool {
    path.to_string_lossy().to_ascii_lowercase().ends_with(".xml")
}

/// Checks that a file name ends with a `.[0-9a-z]+` suffix.
///
/// A leading dot marks a hidden name, not an extension.
fn has_extension(path: &Path) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };

    match name.rfind('.') {
        Some(idx) if idx > 0 => {
            let ext = &name[idx + 1..];
            !ext.is_empty() && ext.bytes().all(|c| c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

fn xml_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = if name.to_ascii_lowercase().ends_with(".svg") {
        &name[..name.len() - 4]
    } else {
        name.as_str()
    };

    format!("{}.xml", stem)
}
