use mintemp_core::{AdvisoryLabel, ModelInferenceError, Prediction, Severity};

pub fn print_form_header() {
    println!("🌡 Canberra Weather Intelligence");
    println!("Minimum temperature prediction from four climate parameters.");
    println!();
}

pub fn print_prediction(prediction: &Prediction) {
    println!("{}", format_prediction(prediction));
}

pub fn print_json(prediction: &Prediction) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(prediction)?);
    Ok(())
}

pub fn print_unavailable(err: &ModelInferenceError) {
    eprintln!("⚠ Prediction unavailable: {err}");
}

fn format_prediction(prediction: &Prediction) -> String {
    let advisory = prediction.advisory;

    format!(
        "Predicted Minimum Temperature: {:.2} °C\n{} {} {}",
        prediction.result.min_temperature_c,
        severity_tag(advisory.severity()),
        icon(advisory),
        advisory.message(),
    )
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "[warning]",
        Severity::Info => "[info]",
        Severity::Success => "[ok]",
    }
}

fn icon(label: AdvisoryLabel) -> &'static str {
    match label {
        AdvisoryLabel::Freezing => "❄",
        AdvisoryLabel::Cold => "🧥",
        AdvisoryLabel::Mild => "🌤",
    }
}
