//! Instruction template sent to the model for each audit.

/// Prompt preamble. The subject is appended verbatim after it.
const AUDIT_PREAMBLE: &str = "You are a sales opportunity auditor. Based on the company or opportunity name provided, generate a realistic opportunity audit.";

/// Output contract appended after the subject line.
const AUDIT_OUTPUT_CONTRACT: &str = r##"Return ONLY valid JSON (no markdown, no backticks) with this exact structure:
{
  "companyName": "string",
  "riskLevel": "LOW" or "MODERATE" or "HIGH",
  "riskSummary": "one sentence summary of the deal status",
  "strengths": ["strength 1", "strength 2", "strength 3"],
  "risks": ["risk 1", "risk 2", "risk 3"],
  "nextSteps": {
    "immediate": ["action 1", "action 2"],
    "thisWeek": ["action 1", "action 2"],
    "nextTwoWeeks": ["action 1", "action 2"]
  },
  "gapAnalysis": {
    "complete": ["item 1", "item 2"],
    "partial": ["item 1"],
    "missing": ["item 1", "item 2"]
  },
  "crmLinks": {
    "salesforce": null,
    "hubspot": null
  }
}"##;

/// Build the audit prompt for a subject.
///
/// The subject is embedded as given: no escaping, no trimming, no length limit.
pub fn build_prompt(subject: &str) -> String {
    format!(
        "{}\n\nCompany/Opportunity: {}\n\n{}",
        AUDIT_PREAMBLE, subject, AUDIT_OUTPUT_CONTRACT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_subject() {
        let prompt = build_prompt("Acme Corp - Q3 renewal");
        assert!(prompt.starts_with("You are a sales opportunity auditor."));
        assert!(prompt.contains("Company/Opportunity: Acme Corp - Q3 renewal\n"));
        assert!(prompt.contains("\"nextTwoWeeks\""));
        assert!(prompt.contains("no markdown, no backticks"));
    }

    #[test]
    fn test_subject_is_verbatim() {
        let subject = "  \"Globex\" {ignore previous}  ";
        let prompt = build_prompt(subject);
        assert!(prompt.contains(&format!("Company/Opportunity: {}\n", subject)));
    }

    #[test]
    fn test_template_is_fixed() {
        let a = build_prompt("A");
        let b = build_prompt("B");
        assert_eq!(a.replacen("Opportunity: A", "", 1), b.replacen("Opportunity: B", "", 1));
    }
}
