//! Accessibility analysis prompt construction
//!
//! Pure mapping from extracted page HTML to the instruction text sent to
//! the remote model. The output-shape contract (raw JSON array of findings)
//! is advisory to the model; nothing here or downstream enforces it.

/// Instruction block prepended to every analysis request
const INSTRUCTIONS: &str = r#"You are an accessibility expert tasked with analyzing the following HTML document for **all** accessibility issues.

Focus specifically on:
  1. **Screen Reader Compatibility** (e.g., missing alt text, incorrect ARIA attributes, unlabeled form elements, non-semantic HTML elements),
  2. **Keyboard Navigation** (e.g., non-focusable elements, missing skip links, improper tab order, lack of visible focus indicators),
  3. **WCAG 2.0 & 2.1 Compliance** (e.g., insufficient color contrast, improper use of headings, missing error messages, text resizing issues),
  4. **General Accessibility Best Practices** (e.g., language attributes, semantic structure, accessibility of multimedia content, ARIA roles and attributes),
  5. **ARIA Best Practices** (e.g., incorrect or missing ARIA attributes, incorrect role usage).
  6. **No redundant issues** Combine all similar issues into a single issue.

Analyze the document for **all existing accessibility issues** related to these areas. Identify **all problems** and their corresponding WCAG rule(s), ARIA issues, or other best practices.

**EXAMPLE of the required output is direct json no prefix output should be directly able to parse:**
    [
        {
            "Rule/Guideline":"WCAG 2.1 1.1.1",
            "Why":"Image is missing the alt attribute.",
            "How to fix":"Add an alt attribute describing the image content or function, e.g., <img src='...' alt='Description'>."
        },
        {
            "Rule/Guideline":"WCAG 2.1 2.4.4",
            "Why":"Link text 'Details' is ambiguous without surrounding context.",
            "How to fix":"Provide more descriptive link text or use aria-label to provide context, e.g., <a href='...' aria-label='View Details for Product X'>Details</a>."
        }
    ]
    The response should contain only raw **JSON data**. Please **do not include any markdown or other formatting** - just the pure JSON array, no text or markdown."#;

/// Build the full analysis prompt for a page.
///
/// Deterministic and total: the HTML is appended verbatim, unescaped.
pub fn build_prompt(page_html: &str) -> String {
    format!("{}\n\nHTML document:\n{}\n", INSTRUCTIONS, page_html)
}
