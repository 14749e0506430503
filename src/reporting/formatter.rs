use crate::models::{Iteration, Report, ReportStats, Run, Verification};
use crate::utils::formatting::format_timestamp;

use super::escape::{escape_html, escape_multiline};

/// Renders a parsed solver log as a single self-contained HTML document.
/// Pure string assembly: same report in, same document out.
pub fn render_report(report: &Report) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        {problem}
        {stats}
        {runs}
        {footer}
    </div>
    <script>{js}</script>
</body>
</html>"#,
        title = escape_html(&report.title),
        css = inline_css(),
        js = inline_javascript(),
        problem = render_problem_info(report),
        stats = render_stats(&report.stats()),
        runs = render_runs(&report.runs),
        footer = render_footer(),
    )
}

fn render_problem_info(report: &Report) -> String {
    let statement = if report.problem_statement.trim().is_empty() {
        "No problem statement provided".to_string()
    } else {
        escape_html(&report.problem_statement)
    };
    let timestamp = if report.timestamp.trim().is_empty() {
        "N/A".to_string()
    } else {
        escape_html(&format_timestamp(&report.timestamp))
    };
    let model = if report.model.trim().is_empty() {
        "N/A".to_string()
    } else {
        escape_html(&report.model)
    };

    format!(
        r#"<div class="metadata">
            <h2>Problem Information</h2>
            <div class="metadata-grid">
                <div class="metadata-item">
                    <div class="metadata-label">Problem Statement</div>
                    <div class="problem-statement">{statement}</div>
                </div>
                <div class="metadata-item">
                    <div class="metadata-label">Timestamp</div>
                    <div class="metadata-value">{timestamp}</div>
                </div>
                <div class="metadata-item">
                    <div class="metadata-label">Model</div>
                    <div class="metadata-value">{model}</div>
                </div>
            </div>
        </div>"#,
        statement = statement,
        timestamp = timestamp,
        model = model,
    )
}

fn render_stats(stats: &ReportStats) -> String {
    let cards = [
        ("Total Runs", stats.total_runs),
        ("Successful Runs", stats.successful_runs),
        ("Failed Runs", stats.failed_runs),
        ("Total Iterations", stats.total_iterations),
        ("Total Correct", stats.total_correct),
        ("Total Errors", stats.total_errors),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            r#"<div class="stat-item">
                <div class="stat-label">{label}</div>
                <div class="stat-value">{value}</div>
            </div>
"#
        )
    })
    .collect::<String>();

    format!(
        r#"<h2>Statistics Summary</h2>
        <div class="stats">
            {cards}
        </div>"#,
        cards = cards,
    )
}

fn render_runs(runs: &[Run]) -> String {
    if runs.is_empty() {
        return String::new();
    }
    let sections: String = runs.iter().map(render_run).collect();
    format!("<h2>Solution Attempts</h2>\n{sections}")
}

fn render_run(run: &Run) -> String {
    let timestamp = run
        .timestamp
        .as_deref()
        .map(|t| escape_html(&format_timestamp(t)))
        .unwrap_or_default();

    let mut body = String::new();
    if let Some(reason) = &run.reason {
        body.push_str(&format!(
            "<p><strong>Reason:</strong> {}</p>\n",
            escape_html(reason)
        ));
    }
    if !run.iterations.is_empty() {
        body.push_str(&format!("<h3>Iterations ({})</h3>\n", run.iterations.len()));
        for iteration in &run.iterations {
            body.push_str(&render_iteration(iteration));
        }
    }

    format!(
        r#"<div class="run">
            <div class="run-header">
                <strong>Run {index}</strong>
                <span class="status {status_class}">{status}</span>
                <small style="float: right;">{timestamp}</small>
            </div>
            <div class="run-content{expanded}">
                {body}
            </div>
        </div>"#,
        index = run.index,
        status_class = run.status.css_class(),
        status = run.status.label(),
        timestamp = timestamp,
        // first attempt opens pre-expanded, the rest stay collapsed
        expanded = if run.index == 1 { " expanded" } else { "" },
        body = body,
    )
}

fn render_iteration(iteration: &Iteration) -> String {
    let counts = match (iteration.correct_count, iteration.error_count) {
        (None, None) => String::new(),
        (correct, errors) => format!(
            r#"<small style="margin-left: 15px;">Correct: {}, Errors: {}</small>"#,
            correct.unwrap_or(0),
            errors.unwrap_or(0),
        ),
    };

    format!(
        r#"<div class="iteration">
            <div class="iteration-header">
                <strong>Iteration {index}</strong>
                <span class="status {outcome_class}">{outcome}</span>
                {counts}
            </div>
            <button class="toggle-btn">Show Solution</button>
            <div class="solution-text">{solution}</div>
            {verification}
        </div>"#,
        index = iteration.index,
        outcome_class = iteration.verification.outcome.css_class(),
        outcome = iteration.verification.outcome.label(),
        counts = counts,
        solution = escape_html(&iteration.solution_text),
        verification = render_verification(&iteration.verification),
    )
}

fn render_verification(verification: &Verification) -> String {
    let bug_report = match &verification.bug_report {
        Some(text) => format!(
            r#"<div class="bug-report"><strong>Bug Report:</strong><br>{}</div>"#,
            escape_multiline(text)
        ),
        None => "<p><strong>Bug Report:</strong> N/A</p>".to_string(),
    };
    let details = match &verification.details {
        Some(text) => format!(
            r#"<div class="verification-detail"><strong>Details:</strong><br>{}</div>"#,
            escape_multiline(text)
        ),
        None => "<p><strong>Details:</strong> N/A</p>".to_string(),
    };

    format!(
        r#"<div class="verification">
            <div class="verification-header">Verification Results</div>
            <p><strong>Outcome:</strong> <span class="status {outcome_class}">{outcome}</span></p>
            {bug_report}
            {details}
        </div>"#,
        outcome_class = verification.outcome.css_class(),
        outcome = verification.outcome.label(),
        bug_report = bug_report,
        details = details,
    )
}

fn render_footer() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    format!(
        r#"<footer>
            <p>Generated by solview v{version} ({git_hash})</p>
        </footer>"#
    )
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    margin: 0;
    padding: 20px;
    background-color: #f5f5f5;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    background-color: white;
    padding: 30px;
    border-radius: 10px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
}
h1 {
    color: #2c3e50;
    border-bottom: 3px solid #3498db;
    padding-bottom: 10px;
    margin-bottom: 30px;
}
h2 {
    color: #34495e;
    border-left: 4px solid #3498db;
    padding-left: 15px;
    margin-top: 30px;
}
h3 {
    color: #2c3e50;
    margin-top: 25px;
}
.metadata {
    background-color: #ecf0f1;
    padding: 20px;
    border-radius: 8px;
    margin-bottom: 30px;
}
.metadata-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 15px;
}
.metadata-item {
    background-color: white;
    padding: 15px;
    border-radius: 6px;
    border-left: 4px solid #3498db;
}
.metadata-label {
    font-weight: bold;
    color: #2c3e50;
    margin-bottom: 5px;
}
.metadata-value {
    color: #34495e;
}
.run {
    border: 2px solid #bdc3c7;
    border-radius: 8px;
    margin: 20px 0;
    overflow: hidden;
}
.run-header {
    background-color: #34495e;
    color: white;
    padding: 15px;
    cursor: pointer;
    user-select: none;
}
.run-header:hover {
    background-color: #2c3e50;
}
.run-content {
    padding: 20px;
    display: none;
}
.run-content.expanded {
    display: block;
}
.status {
    display: inline-block;
    padding: 5px 12px;
    border-radius: 20px;
    font-weight: bold;
    font-size: 0.9em;
    margin-left: 15px;
}
.status.failed {
    background-color: #e74c3c;
    color: white;
}
.status.success {
    background-color: #27ae60;
    color: white;
}
.status.other {
    background-color: #95a5a6;
    color: white;
}
.iteration {
    border: 1px solid #ddd;
    border-radius: 6px;
    margin: 15px 0;
    padding: 15px;
}
.iteration-header {
    background-color: #f8f9fa;
    padding: 10px;
    border-radius: 4px;
    margin-bottom: 15px;
}
.verification {
    background-color: #fff3cd;
    border: 1px solid #ffeaa7;
    border-radius: 6px;
    padding: 15px;
    margin-top: 15px;
}
.verification-header {
    font-weight: bold;
    color: #856404;
    margin-bottom: 10px;
}
.verification-detail {
    background-color: white;
    border: 1px solid #ffeaa7;
    border-radius: 6px;
    padding: 15px;
    margin-top: 10px;
}
.bug-report {
    background-color: #f8d7da;
    border: 1px solid #f5c6cb;
    border-radius: 6px;
    padding: 15px;
    margin-top: 10px;
}
.solution-text {
    background-color: #f8f9fa;
    border: 1px solid #dee2e6;
    border-radius: 6px;
    padding: 20px;
    margin: 15px 0;
    white-space: pre-wrap;
    font-family: 'Courier New', monospace;
    font-size: 0.9em;
    max-height: 400px;
    overflow-y: auto;
}
.toggle-btn {
    background-color: #3498db;
    color: white;
    border: none;
    padding: 8px 16px;
    border-radius: 4px;
    cursor: pointer;
    margin: 10px 0;
}
.toggle-btn:hover {
    background-color: #2980b9;
}
.stats {
    display: flex;
    gap: 20px;
    margin: 20px 0;
    flex-wrap: wrap;
}
.stat-item {
    background-color: #e8f4fd;
    padding: 10px 15px;
    border-radius: 6px;
    border-left: 4px solid #3498db;
}
.stat-label {
    font-weight: bold;
    color: #2c3e50;
}
.stat-value {
    color: #34495e;
    font-size: 1.2em;
}
.problem-statement {
    background-color: #e8f5e8;
    border: 1px solid #c3e6c3;
    border-radius: 6px;
    padding: 20px;
    margin: 20px 0;
    white-space: pre-wrap;
    font-family: 'Georgia', serif;
    line-height: 1.8;
}
footer {
    margin-top: 30px;
    text-align: center;
    color: #7f8c8d;
    font-size: 0.9em;
}
@media (max-width: 768px) {
    .container {
        padding: 15px;
    }
    .metadata-grid {
        grid-template-columns: 1fr;
    }
    .stats {
        flex-direction: column;
    }
}
"#
}

/// Inline JavaScript for expand/collapse interactivity
fn inline_javascript() -> &'static str {
    r#"
// Toggle run content visibility
document.querySelectorAll('.run-header').forEach(header => {
    header.addEventListener('click', function() {
        const content = this.nextElementSibling;
        content.classList.toggle('expanded');
    });
});

// Toggle solution text visibility
document.querySelectorAll('.toggle-btn').forEach(btn => {
    btn.addEventListener('click', function() {
        const solutionText = this.nextElementSibling;
        if (solutionText.style.display === 'none') {
            solutionText.style.display = 'block';
            this.textContent = 'Hide Solution';
        } else {
            solutionText.style.display = 'none';
            this.textContent = 'Show Solution';
        }
    });
    // Initially hide solution text
    const solutionText = btn.nextElementSibling;
    solutionText.style.display = 'none';
});

// Escape collapses every open section
document.addEventListener('keydown', function(e) {
    if (e.key === 'Escape') {
        document.querySelectorAll('.run-content.expanded').forEach(content => {
            content.classList.remove('expanded');
        });
    }
});
"#
}
