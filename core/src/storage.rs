use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::ConvertConfig;
use crate::course::construct_with;
use crate::error::{WozError, WozResult};

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> WozError + '_ {
    move |source| WozError::Io { path: path.to_path_buf(), source }
}

/// Rå .woz-tekst → én beskrivelse per linje.
/// En linje som slutter med komma fortsetter på neste linje. Tomme linjer hoppes over.
pub fn split_workout_text(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut pending = String::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            warn!("hopper over tom linje {}", i + 1);
            continue;
        }
        pending.push_str(line);
        if line.ends_with(',') {
            // fortsettelse: "a,\nb" → "a, b"
            pending.push(' ');
            continue;
        }
        out.push(std::mem::take(&mut pending));
    }
    let rest = pending.trim_end();
    if !rest.is_empty() {
        out.push(rest.to_string());
    }

    out
}

/// Leser inn workout-fil fra disk.
pub fn read_workout(path: &Path) -> WozResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(io_err(path))?;
    let lines = split_workout_text(&text);
    debug!("📂 {} linjer lest fra {}", lines.len(), path.display());
    Ok(lines)
}

/// `økt.woz` → `økt.woz.mrc` (samme mappe).
pub fn course_path_for(input: &Path) -> PathBuf {
    let mut s = input.as_os_str().to_owned();
    s.push(".mrc");
    PathBuf::from(s)
}

/// FILE NAME-verdien: filens basenavn.
pub fn course_name_for(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workout".to_string())
}

/// Skriver kurslinjene, separert med '\n'.
pub fn write_course(path: &Path, lines: &[String]) -> WozResult<()> {
    std::fs::write(path, lines.join("\n")).map_err(io_err(path))
}

/// Les, konverter og skriv. Returnerer stien som ble skrevet.
pub fn convert_file(input: &Path, output: Option<&Path>, cfg: &ConvertConfig) -> WozResult<PathBuf> {
    let lines = read_workout(input)?;
    let name = course_name_for(input);
    let course = construct_with(&name, &lines, cfg)?;

    let out_path = output.map(Path::to_path_buf).unwrap_or_else(|| course_path_for(input));
    write_course(&out_path, &course)?;
    info!(
        "✅ {} → {} ({} linjer)",
        input.display(),
        out_path.display(),
        course.len()
    );
    Ok(out_path)
}
