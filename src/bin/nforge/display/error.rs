use std::io::{self, Write};

use anyhow::Error;

use nuclide_forge::{ParseAtomError, SimulationError, ValidationError};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(e) = err.downcast_ref::<SimulationError>() {
        simulation_hints(e, &mut hints);
    } else if let Some(e) = err.downcast_ref::<ParseAtomError>() {
        parse_hints(e, &mut hints);
    } else if let Some(e) = err.downcast_ref::<ValidationError>() {
        validation_hints(e, &mut hints);
    } else if let Some(e) = err.downcast_ref::<io::Error>() {
        io_hints(e, &mut hints);
    }

    hints
}

fn simulation_hints(err: &SimulationError, hints: &mut Vec<String>) {
    match err {
        SimulationError::ConfigParse(_) => {
            hints.push("The config file is not valid TOML or has an unknown key".into());
            hints.push(
                "Known keys: seed, ticks, [spawn] count/min_protons/max_protons, \
                 [[atoms]] protons/neutrons/electrons"
                    .into(),
            );
        }
        SimulationError::InvalidAtom { index, source } => {
            hints.push(format!("Check entry {} of the [[atoms]] list", index + 1));
            validation_hints(source, hints);
        }
        SimulationError::InvalidProtonRange { .. } => {
            hints.push("Set [spawn] min_protons no larger than max_protons".into());
            hints.push("Or override both with --min-protons and --max-protons".into());
        }
    }
}

fn parse_hints(err: &ParseAtomError, hints: &mut Vec<String>) {
    match err {
        ParseAtomError::Format(_) | ParseAtomError::Count(_) => {
            hints.push("Write atoms as PROTONS,NEUTRONS,ELECTRONS, e.g. 8,8,8".into());
            hints.push("Counts are whole numbers; spaces around commas are allowed".into());
        }
        ParseAtomError::Validation(e) => validation_hints(e, hints),
    }
}

fn validation_hints(err: &ValidationError, hints: &mut Vec<String>) {
    match err {
        ValidationError::NegativeCount { particle, .. } => {
            hints.push(format!("The {} count cannot be below zero", particle));
        }
        ValidationError::CountTooLarge { particle, max, .. } => {
            hints.push(format!("The {} count must not exceed {}", particle, max));
        }
    }
}

fn io_hints(err: &io::Error, hints: &mut Vec<String>) {
    match err.kind() {
        io::ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        io::ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".into());
        }
        io::ErrorKind::InvalidData => {
            hints.push("The file must be UTF-8 encoded TOML".into());
        }
        _ => {}
    }
}
