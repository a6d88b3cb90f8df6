use resumate_core::{
    DownloadRowView, Step, StepIndicator, StepStatus, WizardViewModel, MIN_DESCRIPTION_CHARS,
};

use super::input::{
    CMD_BOTH, CMD_CLEAR, CMD_COVER, CMD_DISMISS, CMD_HELP, CMD_QUIT, CMD_RESTART, CMD_RESUME,
    CMD_SUBMIT,
};

const RULE: &str = "------------------------------------------------------------";

const DESCRIPTION_TIPS: [&str; 6] = [
    "Job title and company name",
    "Required technical skills and technologies",
    "Years of experience needed",
    "Educational requirements",
    "Key responsibilities and duties",
    "Preferred qualifications or certifications",
];

pub fn render(view: &WizardViewModel) -> Vec<String> {
    let mut lines = vec![RULE.to_owned(), format_steps(&view.steps)];

    if let Some(alert) = &view.alert {
        lines.push(String::new());
        lines.push(format!("*** {alert} ***"));
        lines.push("Press Enter to continue.".to_owned());
        return lines;
    }

    if let Some(error) = &view.error {
        lines.push(String::new());
        lines.push(format!("Error: {error}"));
        lines.push(format!(
            "  {CMD_RESTART} to start over, {CMD_DISMISS} to hide this message"
        ));
    }

    lines.push(String::new());
    if view.loading {
        lines.push("Optimizing your resume...".to_owned());
        lines.push("Analyzing your resume and the job description. This can take a while.".to_owned());
        return lines;
    }

    match view.step {
        Step::Upload => render_upload(view, &mut lines),
        Step::JobDescription => render_job_description(view, &mut lines),
        Step::Results => render_results(view, &mut lines),
    }

    if let Some(inline) = &view.inline_error {
        lines.push(format!("  ! {inline}"));
    }
    lines
}

pub fn help() -> Vec<String> {
    vec![
        "Commands:".to_owned(),
        "  <path>            choose a resume (upload step)".to_owned(),
        "  <text>            append a line to the job description".to_owned(),
        format!("  {CMD_SUBMIT:<17} optimize with the current job description"),
        format!("  {CMD_CLEAR:<17} empty the job description"),
        "  ::<command>       append a command word as description text".to_owned(),
        format!("  {CMD_RESUME:<17} download the optimized resume"),
        format!("  {CMD_COVER:<17} download the cover letter"),
        format!("  {CMD_BOTH:<17} download both documents"),
        format!("  {CMD_DISMISS:<17} hide the error message"),
        format!("  {CMD_RESTART:<17} start over"),
        format!("  {CMD_HELP:<17} show this help"),
        format!("  {CMD_QUIT:<17} leave"),
    ]
}

fn format_steps(steps: &[StepIndicator]) -> String {
    steps
        .iter()
        .map(|indicator| {
            let marker = match indicator.status {
                StepStatus::Current => "[>]",
                StepStatus::Completed => "[x]",
                StepStatus::Pending => "[ ]",
            };
            format!("{marker} {}", indicator.label)
        })
        .collect::<Vec<_>>()
        .join("  --  ")
}

fn render_upload(_view: &WizardViewModel, lines: &mut Vec<String>) {
    lines.push("Upload Your Resume".to_owned());
    lines.push("Type the path of your resume (PDF or DOCX, up to 5MB) and press Enter.".to_owned());
}

fn render_job_description(view: &WizardViewModel, lines: &mut Vec<String>) {
    lines.push("Job Description".to_owned());
    if let Some(file) = &view.file {
        lines.push(format!(
            "Resume: {} ({} bytes)",
            file.file_name,
            format_with_commas(file.size)
        ));
    }
    lines.push(format!(
        "Paste the job description; every line is appended. {CMD_SUBMIT} to optimize, {CMD_CLEAR} to start the text over."
    ));
    let submit = if view.can_submit {
        format!("ready, type {CMD_SUBMIT}")
    } else {
        "submit disabled".to_owned()
    };
    lines.push(format!(
        "{} characters (minimum {MIN_DESCRIPTION_CHARS} required) - {submit}",
        view.draft_chars
    ));
    lines.push("Tip: Include these details for best results".to_owned());
    lines.extend(DESCRIPTION_TIPS.iter().map(|tip| format!("  * {tip}")));
}

fn render_results(view: &WizardViewModel, lines: &mut Vec<String>) {
    lines.push("Your Optimized Documents".to_owned());
    lines.push("Optimization complete! Both documents are ready for download.".to_owned());
    for row in &view.downloads {
        lines.push(format_download_row(row));
    }
    lines.push(format!(
        "{CMD_RESUME} / {CMD_COVER} to download one, {CMD_BOTH} for both, {CMD_RESTART} to start over."
    ));
}

fn format_download_row(row: &DownloadRowView) -> String {
    let mut text = format!("  {}: {} <{}>", row.document.label(), row.file_name, row.url);
    if row.in_flight > 0 {
        text.push_str(&format!(" [downloading x{}]", row.in_flight));
    }
    if let Some(saved) = &row.saved {
        text.push_str(&format!(
            " [saved to {}, {} bytes]",
            saved.location,
            format_with_commas(saved.byte_len)
        ));
    }
    text
}

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
