use std::fmt::Write;
use unisphere::matching::recommendation::{GroupedUniversity, RecommendationResult};

pub(crate) fn render_text(result: &RecommendationResult, include_summary: bool) -> String {
    let mut out = String::new();

    let _ = write!(out, "Recommendations for {}%", result.student_percentage);
    if let Some(interest) = &result.field_of_interest {
        let _ = write!(out, " (interest: {interest})");
    }
    out.push('\n');

    render_section(&mut out, "Eligible", &result.eligible);
    render_section(&mut out, "Not eligible", &result.not_eligible);

    if include_summary {
        let summary = result.summary();
        let _ = writeln!(out, "\nSummary");
        let _ = writeln!(
            out,
            "- {} eligible program(s) across {} universit(ies)",
            summary.eligible_programs, summary.eligible_universities
        );
        let _ = writeln!(
            out,
            "- {} program(s) out of reach across {} universit(ies)",
            summary.not_eligible_programs, summary.not_eligible_universities
        );
        for entry in &summary.faculty_breakdown {
            let _ = writeln!(out, "  - {}: {}", entry.faculty_label, entry.eligible_programs);
        }
    }

    out
}

fn render_section(out: &mut String, title: &str, groups: &[GroupedUniversity]) {
    if groups.is_empty() {
        let _ = writeln!(out, "\n{title}: none");
        return;
    }

    let _ = writeln!(out, "\n{title}");
    for group in groups {
        let _ = write!(out, "- {} (rating {:.1})", group.university_name, group.rating);
        if let Some(address) = &group.address {
            let _ = write!(out, ", {address}");
        }
        out.push('\n');

        for program in &group.programs {
            let _ = write!(
                out,
                "    - {} [{}] min {}%",
                program.name, program.faculty_label, program.min_percentage
            );
            if let Some(reason) = &program.reason {
                let _ = write!(out, " -> {reason}");
            }
            out.push('\n');
        }
    }
}
