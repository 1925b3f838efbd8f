//! # Script Form
//!
//! The on-disk shape of an implementor table, as a documentation generator
//! emits it next to the rendered pages:
//!
//! ```text
//! (function() {var implementors = {};
//! implementors["arrayvec"] = [{"text":"impl UnwindSafe for ArrayString","synthetic":true,"types":[]}];
//! if (window.register_implementors) {window.register_implementors(implementors);} else {window.pending_implementors = implementors;}})()
//! ```
//!
//! One line per library, in ascending library order, with the descriptor
//! array encoded as JSON. Descriptor text is copied verbatim in both
//! directions.

use implementors_core::{
    Delivery, Environment, ImplementorList, ImplementorTable, RegistryError, ScriptError,
    TableBuilder, publish,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// First line of every script.
pub const PRELUDE: &str = "(function() {var implementors = {};";

/// Last line of every script: the hand-off.
pub const EPILOGUE: &str = "if (window.register_implementors) {window.register_implementors(implementors);} else {window.pending_implementors = implementors;}})()";

const ENTRY_OPEN: &str = "implementors[";
const ENTRY_ASSIGN: &str = "] = ";

/// Where scripts live and how they are terminated.
///
/// # Example
///
/// ```rust
/// use implementors_std::script::{ScriptLayout, script_path};
/// use std::path::PathBuf;
///
/// let layout = ScriptLayout::new();
/// assert_eq!(
///     script_path("std::panic", "UnwindSafe", &layout).unwrap(),
///     PathBuf::from("implementors/std/panic/trait.UnwindSafe.js"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLayout {
    root: PathBuf,
    trailing_newline: bool,
}

impl Default for ScriptLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptLayout {
    /// Scripts under `implementors/`, no trailing newline.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("implementors"),
            trailing_newline: false,
        }
    }

    /// Set the directory scripts are placed under.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set whether rendered scripts end with a newline.
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// The directory scripts are placed under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether rendered scripts end with a newline.
    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }
}

/// Relative path of the script for `trait_name` declared in `module_path`.
///
/// `module_path` uses `::` separators; empty segments are skipped. Segments
/// and `trait_name` must be plain names: `.`, `..` and path separators are
/// rejected so the result stays under the layout root.
pub fn script_path(
    module_path: &str,
    trait_name: &str,
    layout: &ScriptLayout,
) -> Result<PathBuf, ScriptError> {
    let mut path = layout.root.clone();
    for segment in module_path.split("::").filter(|s| !s.is_empty()) {
        path.push(checked_segment(segment)?);
    }
    if trait_name.is_empty() {
        return Err(ScriptError::InvalidPathSegment(String::new()));
    }
    path.push(format!("trait.{}.js", checked_segment(trait_name)?));
    Ok(path)
}

fn checked_segment(segment: &str) -> Result<&str, ScriptError> {
    if segment == "." || segment == ".." || segment.contains(['/', '\\', '\0']) {
        return Err(ScriptError::InvalidPathSegment(segment.to_owned()));
    }
    Ok(segment)
}

/// Render `table` in script form.
pub fn render_script(
    table: &ImplementorTable,
    layout: &ScriptLayout,
) -> Result<String, ScriptError> {
    let mut out = String::with_capacity(PRELUDE.len() + EPILOGUE.len() + 2);
    out.push_str(PRELUDE);
    out.push('\n');

    for (library, implementors) in table.iter() {
        let encode = |source| ScriptError::Json {
            library: library.to_owned(),
            source,
        };
        out.push_str(ENTRY_OPEN);
        out.push_str(&serde_json::to_string(library).map_err(encode)?);
        out.push_str(ENTRY_ASSIGN);
        out.push_str(&serde_json::to_string(implementors).map_err(encode)?);
        out.push_str(";\n");
    }

    out.push_str(EPILOGUE);
    if layout.trailing_newline {
        out.push('\n');
    }
    Ok(out)
}

/// Read a table back from its script form.
///
/// Blank lines are ignored. Everything between the prelude and the epilogue
/// must be a library entry.
pub fn parse_script(source: &str) -> Result<ImplementorTable, ScriptError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, line)) if line == PRELUDE => {}
        _ => return Err(ScriptError::MissingPrelude),
    }

    let mut builder = TableBuilder::new();
    let mut closed = false;
    for (number, line) in lines {
        if closed {
            return Err(ScriptError::MalformedEntry {
                line: number,
                reason: "content after registration epilogue".into(),
            });
        }
        if line == EPILOGUE {
            closed = true;
            continue;
        }
        let (library, implementors) = parse_entry(number, line)?;
        builder.insert(library, implementors)?;
    }

    if !closed {
        return Err(ScriptError::MissingEpilogue);
    }
    Ok(builder.build())
}

fn parse_entry(number: usize, line: &str) -> Result<(String, ImplementorList), ScriptError> {
    let malformed = |reason: &str| ScriptError::MalformedEntry {
        line: number,
        reason: reason.to_owned(),
    };

    let rest = line
        .strip_prefix(ENTRY_OPEN)
        .ok_or_else(|| malformed("expected `implementors[`"))?;

    let mut keys = serde_json::Deserializer::from_str(rest).into_iter::<String>();
    let library = match keys.next() {
        Some(Ok(library)) => library,
        _ => return Err(malformed("expected a quoted library name")),
    };
    let rest = &rest[keys.byte_offset()..];

    let array = rest
        .strip_prefix(ENTRY_ASSIGN)
        .ok_or_else(|| malformed("expected `] = ` after library name"))?
        .strip_suffix(';')
        .ok_or_else(|| malformed("expected `;` at end of entry"))?;

    let implementors = serde_json::from_str(array).map_err(|source| ScriptError::Json {
        library: library.clone(),
        source,
    })?;
    Ok((library, implementors))
}

/// Render `table` and write it to its script path under `dir`, creating
/// directories as needed. Returns the full path written.
pub fn write_script(
    dir: &Path,
    module_path: &str,
    trait_name: &str,
    table: &ImplementorTable,
    layout: &ScriptLayout,
) -> Result<PathBuf, ScriptError> {
    let path = dir.join(script_path(module_path, trait_name, layout)?);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, render_script(table, layout)?)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        path = %path.display(),
        libraries = table.len(),
        "wrote implementors script"
    );
    Ok(path)
}

/// Read and parse the script at `path`.
pub fn read_script(path: &Path) -> Result<ImplementorTable, ScriptError> {
    parse_script(&fs::read_to_string(path)?)
}

/// Read the script at `path` and publish its table into `env`.
pub fn publish_script<E: Environment + ?Sized>(
    path: &Path,
    env: &mut E,
) -> Result<Delivery, RegistryError> {
    let table = read_script(path)?;
    Ok(publish(table.into_shared(), env))
}
