use std::io::Write;

use nuclide_forge::{
    Atom, BondOutcome, DecayOutcome, Element, Molecule, NoDecayReason, SimulationReport,
};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ROWS: usize = 20;

/// One column of a grid table.
struct Column {
    header: &'static str,
    width: usize,
    right: bool,
}

impl Column {
    const fn left(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            right: false,
        }
    }

    const fn right(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            right: true,
        }
    }

    fn cell(&self, text: &str) -> String {
        let text = truncate(text, self.width);
        if self.right {
            format!("{:>w$}", text, w = self.width)
        } else {
            format!("{:<w$}", text, w = self.width)
        }
    }
}

pub fn print_atom_report(out: &mut impl Write, atom: &Atom) {
    let props = atom.properties();

    let rows = vec![
        ("Protons", atom.protons().to_string()),
        ("Neutrons", atom.neutrons().to_string()),
        ("Electrons", atom.electrons().to_string()),
        ("Mass Number", props.mass_number.to_string()),
        ("Atomic Mass (u)", format!("{:.4}", props.atomic_mass)),
        ("Charge", signed(props.charge)),
        ("Valence", props.valence.to_string()),
        (
            "Stability",
            if props.stable { "stable" } else { "unstable" }.to_string(),
        ),
        ("Element", element_name(props.element)),
    ];

    print_kv_table(out, &format!("Atom {}", atom_label(atom)), &rows);
}

/// Prints each step of a decay run, starting from `start`.
pub fn print_decay_log(
    out: &mut impl Write,
    title: &str,
    start: &Atom,
    steps: &[(u32, DecayOutcome, Atom)],
) {
    let columns = [
        Column::right("Tick", 5),
        Column::left("Outcome", 18),
        Column::left("Atom", 13),
        Column::left("Element", 7),
    ];

    let mut rows = vec![vec![
        "0".to_string(),
        "start".to_string(),
        start.to_string(),
        atom_label(start),
    ]];
    rows.extend(steps.iter().map(|(tick, outcome, atom)| {
        vec![
            tick.to_string(),
            outcome_text(outcome),
            atom.to_string(),
            atom_label(atom),
        ]
    }));

    print_grid(out, title, &columns, &rows);
}

pub fn print_bond_report(
    out: &mut impl Write,
    first: &Atom,
    second: &Atom,
    outcome: &BondOutcome<[f64; 3]>,
) {
    let (va, vb) = (first.valence(), second.valence());
    let mut rows = vec![("Valence", format!("{} + {} = {}", va, vb, va + vb))];

    match outcome {
        BondOutcome::Bonded(molecule) => {
            rows.push(("Result", "bonded".to_string()));
            rows.push(("Formula", formula_or_dash(molecule)));
            rows.push(("Molecular Mass", format!("{:.4}", molecule.molecular_mass())));
            for (atom, placement) in molecule.iter() {
                rows.push((
                    "Placement",
                    format!(
                        "{} @ ({:.2}, {:.2}, {:.2})",
                        atom_label(atom),
                        placement[0],
                        placement[1],
                        placement[2]
                    ),
                ));
            }
        }
        BondOutcome::Refused(refused) => {
            rows.push(("Result", "refused".to_string()));
            rows.push(("Reason", refused.reason.to_string()));
        }
    }

    print_kv_table(
        out,
        &format!("Bond {} + {}", atom_label(first), atom_label(second)),
        &rows,
    );
}

pub fn print_molecule_report(out: &mut impl Write, molecule: &Molecule) {
    let rows = vec![
        ("Atoms", molecule.atom_count().to_string()),
        ("Formula", formula_or_dash(molecule)),
        ("Molecular Mass", format!("{:.4}", molecule.molecular_mass())),
    ];
    print_kv_table(out, "Molecule", &rows);

    let composition: Vec<(String, usize)> = molecule
        .composition()
        .into_iter()
        .map(|(element, count)| (element.symbol().to_string(), count))
        .collect();
    let named: usize = composition.iter().map(|(_, count)| count).sum();

    if named > 0 {
        print_distribution_table(out, "Composition", "Element", &composition, named);
    }
}

pub fn print_population(out: &mut impl Write, title: &str, atoms: &[Atom]) {
    let columns = [
        Column::right("#", 4),
        Column::left("Atom", 13),
        Column::left("Element", 7),
        Column::right("Mass (u)", 10),
        Column::left("Stability", 9),
    ];

    let rows: Vec<Vec<String>> = atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| {
            vec![
                index.to_string(),
                atom.to_string(),
                atom_label(atom),
                format!("{:.4}", atom.atomic_mass()),
                if atom.is_stable() { "stable" } else { "unstable" }.to_string(),
            ]
        })
        .collect();

    print_grid(out, title, &columns, &rows);
}

pub fn print_simulation_summary(out: &mut impl Write, report: &SimulationReport) {
    let rows = vec![
        ("Seed", report.seed.to_string()),
        ("Ticks", report.ticks.to_string()),
        ("Atoms", report.atoms.len().to_string()),
        ("Decays", report.decay_count().to_string()),
        ("Infeasible Draws", report.infeasible_draws.to_string()),
        (
            "Stable at End",
            format!("{} / {}", report.stable_count(), report.atoms.len()),
        ),
    ];

    print_kv_table(out, "Simulation Summary", &rows);
}

pub fn print_mode_distribution(out: &mut impl Write, report: &SimulationReport) {
    let total = report.decay_count();
    if total == 0 {
        return;
    }

    let data: Vec<(String, usize)> = report
        .mode_counts()
        .iter()
        .map(|(mode, count)| (mode.to_string(), *count))
        .collect();

    print_distribution_table(out, "Decay Modes", "Mode", &data, total);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 7;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let columns = [Column::left("Property", key_w), Column::right("Value", val_w)];
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(key, val)| vec![key.to_string(), val.clone()])
        .collect();

    print_grid(out, title, &columns, &rows);
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    label: &'static str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 10;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let columns = [
        Column::left(label, name_w),
        Column::right("Count", count_w),
        Column::left("Distribution", dist_w),
    ];

    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|(name, count)| {
            let pct = (*count as f64 / total as f64) * 100.0;
            vec![
                name.clone(),
                count.to_string(),
                format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct),
            ]
        })
        .collect();

    print_grid(out, title, &columns, &rows);
}

fn print_grid(out: &mut impl Write, title: &str, columns: &[Column], rows: &[Vec<String>]) {
    let rule = |left: &str, mid: &str, right: &str| {
        let lines: Vec<String> = columns.iter().map(|c| "─".repeat(c.width + 2)).collect();
        format!("{}{}{}{}", INDENT, left, lines.join(mid), right)
    };
    let line = |cells: Vec<String>| format!("{}│ {} │", INDENT, cells.join(" │ "));

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}",
        line(columns.iter().map(|c| c.cell(c.header)).collect())
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for row in rows.iter().take(MAX_ROWS) {
        let cells = columns
            .iter()
            .zip(row)
            .map(|(column, text)| column.cell(text))
            .collect();
        let _ = writeln!(out, "{}", line(cells));
    }

    if rows.len() > MAX_ROWS {
        let more = format!("({} more rows)", rows.len() - MAX_ROWS);
        let cells = columns
            .iter()
            .enumerate()
            .map(|(i, column)| match i {
                0 => column.cell("..."),
                1 => column.cell(&more),
                _ => column.cell(""),
            })
            .collect();
        let _ = writeln!(out, "{}", line(cells));
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn atom_label(atom: &Atom) -> String {
    match atom.element() {
        Some(element) => element.symbol().to_string(),
        None => format!("Z={}", atom.protons()),
    }
}

fn element_name(element: Option<Element>) -> String {
    element.map_or_else(|| "(unnamed)".to_string(), |e| e.symbol().to_string())
}

fn formula_or_dash(molecule: &Molecule<impl Sized>) -> String {
    let formula = molecule.formula();
    if formula.is_empty() {
        "-".to_string()
    } else {
        formula
    }
}

fn outcome_text(outcome: &DecayOutcome) -> String {
    match outcome {
        DecayOutcome::Decayed(mode) => mode.to_string(),
        DecayOutcome::NoDecay(NoDecayReason::Stable) => "stable".to_string(),
        DecayOutcome::NoDecay(NoDecayReason::Infeasible(mode)) => {
            format!("infeasible ({})", mode)
        }
    }
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
