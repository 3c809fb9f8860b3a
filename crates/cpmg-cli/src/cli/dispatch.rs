#[derive(Debug, Clone, Copy)]
pub(super) struct ExperimentParameter {
    pub(super) name: &'static str,
    pub(super) vary: bool,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct ExperimentDescriptor {
    pub(super) name: &'static str,
    pub(super) title: &'static str,
    pub(super) description: &'static str,
    pub(super) attributes_exp: &'static [&'static str],
    pub(super) params_exp: &'static [ExperimentParameter],
}

const fn fitted(name: &'static str) -> ExperimentParameter {
    ExperimentParameter { name, vary: true }
}

const fn fixed(name: &'static str) -> ExperimentParameter {
    ExperimentParameter { name, vary: false }
}

pub(super) const EXPERIMENTS: [ExperimentDescriptor; 1] = [ExperimentDescriptor {
    name: "cpmg_n_atrosy",
    title: "15N - N-H anti-TROSY CPMG",
    description: "Measures 15N chemical exchange on the anti-TROSY component of the\n\
                  amide doublet. The scalar coupling to the amide proton stays active\n\
                  during the CPMG block and the magnetization starts as 2HzNz.",
    attributes_exp: &["h_larmor_frq", "temperature", "carrier", "time_t2", "pw", "ncyc"],
    params_exp: &[
        fitted("pb"),
        fitted("kex"),
        fitted("dw"),
        fitted("r_nxy"),
        fixed("dr_nxy"),
        fixed("r_nz"),
        fixed("r_2hznz"),
        fixed("etaxy"),
        fixed("etaz"),
        fixed("j_hn"),
        fixed("dj_hn"),
        fixed("cs_offset"),
    ],
}];

pub(super) const DEFAULT_EXPERIMENT: &str = "cpmg_n_atrosy";

pub(super) fn experiment_descriptor(name: &str) -> Option<&'static ExperimentDescriptor> {
    EXPERIMENTS
        .iter()
        .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
}

pub(super) fn experiment_names() -> Vec<&'static str> {
    EXPERIMENTS.iter().map(|descriptor| descriptor.name).collect()
}

pub(super) fn render_experiment_help(descriptor: &ExperimentDescriptor) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, descriptor.title, '=');
    lines.push(String::new());
    lines.push(descriptor.description.to_string());

    push_section(
        &mut lines,
        "Experimental parameters",
        descriptor.attributes_exp.iter().copied(),
    );
    push_section(
        &mut lines,
        "Fitted parameters (by default)",
        descriptor
            .params_exp
            .iter()
            .filter(|parameter| parameter.vary)
            .map(|parameter| parameter.name),
    );
    push_section(
        &mut lines,
        "Fixed parameters (by default)",
        descriptor
            .params_exp
            .iter()
            .filter(|parameter| !parameter.vary)
            .map(|parameter| parameter.name),
    );

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

fn push_header(lines: &mut Vec<String>, title: &str, underline: char) {
    lines.push(title.to_string());
    lines.push(underline.to_string().repeat(title.chars().count()));
}

fn push_section<'a>(
    lines: &mut Vec<String>,
    headline: &str,
    names: impl Iterator<Item = &'a str>,
) {
    lines.push(String::new());
    push_header(lines, headline, '-');
    lines.extend(names.map(|name| format!("  * {name}")));
}
