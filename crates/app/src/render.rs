//! Plain-text rendering for catalog browsing and execution summaries.

use apiconsole_domain::{Catalog, Operation, RequestDraft, Response, format_size};

/// One line per operation: id, method, path and category.
pub fn render_list(catalog: &Catalog) -> String {
    let id_width = catalog.iter().map(|op| op.id.len()).max().unwrap_or(0);

    let mut out = String::new();
    for op in catalog {
        out.push_str(&format!(
            "{:<id_width$}  {:<6} {}",
            op.id,
            op.method.as_str(),
            op.path_template
        ));
        if !op.category.is_empty() {
            out.push_str(&format!("  [{}]", op.category));
        }
        out.push('\n');
    }
    out
}

/// Operation details followed by the seeded default body, if any.
pub fn render_operation(op: &Operation) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", op.method, op.path_template));
    out.push_str(&format!("id: {}\n", op.id));
    if !op.name.is_empty() {
        out.push_str(&format!("name: {}\n", op.name));
    }
    if !op.category.is_empty() {
        out.push_str(&format!("category: {}\n", op.category));
    }
    if let Some(description) = &op.description {
        out.push_str(&format!("description: {description}\n"));
    }

    if !op.parameters.is_empty() {
        out.push_str("\nparameters:\n");
        for parameter in &op.parameters {
            out.push_str(&format!(
                "  {} ({}, {}){}",
                parameter.name,
                parameter.location,
                parameter.declared_type,
                if parameter.required { " required" } else { "" }
            ));
            if let Some(description) = &parameter.description {
                out.push_str(&format!(" - {description}"));
            }
            out.push('\n');
        }
    }

    let draft = RequestDraft::for_operation(op);
    if !draft.body_text.is_empty() {
        out.push_str(&format!("\ndefault body:\n{}\n", draft.body_text));
    }
    out
}

/// Summary line: status, category, time and formatted size.
pub fn render_summary(response: &Response) -> String {
    format!(
        "{} {} | {} | {} ms | {}",
        response.status,
        response.status_text,
        response.category(),
        response.time,
        format_size(response.size)
    )
}
