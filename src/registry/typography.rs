use super::TypographyToken;

const SANS: &str = "Inter";
const MONO: &str = "JetBrains Mono";

const fn text(
    token: &'static str,
    font_family: &'static str,
    font_size: f64,
    font_weight: u16,
    line_height: f64,
    letter_spacing: &'static str,
    usage: &'static str,
) -> TypographyToken {
    TypographyToken {
        token,
        font_family,
        font_size,
        font_weight,
        line_height,
        letter_spacing,
        usage,
    }
}

pub(super) const TYPOGRAPHY: &[TypographyToken] = &[
    text("Display", SANS, 48.0, 700, 56.0, "-0.02em", "Marketing and empty-state hero"),
    text("H1", SANS, 36.0, 700, 44.0, "-0.02em", "Page titles"),
    text("H2", SANS, 30.0, 600, 38.0, "-0.01em", "Section titles"),
    text("H3", SANS, 24.0, 600, 32.0, "0", "Panel titles"),
    text("H4", SANS, 20.0, 600, 28.0, "0", "Card titles"),
    text("H5", SANS, 18.0, 600, 26.0, "0", "Subsection titles"),
    text("H6", SANS, 16.0, 600, 24.0, "0", "Group labels"),
    text("Body Large", SANS, 18.0, 400, 28.0, "0", "Lead paragraphs"),
    text("Body", SANS, 16.0, 400, 24.0, "0", "Default body copy"),
    text("Body Small", SANS, 14.0, 400, 20.0, "0", "Dense tables and secondary copy"),
    text("Label", SANS, 14.0, 500, 20.0, "0", "Form labels"),
    text("Button", SANS, 14.0, 600, 20.0, "0.01em", "CTA labels"),
    text("Caption", SANS, 12.0, 400, 16.0, "0", "Helper text and timestamps"),
    text("Overline", SANS, 11.0, 600, 16.0, "0.08em", "Eyebrow labels, uppercase"),
    text("Code", MONO, 13.0, 400, 20.0, "0", "Identifiers and dosage codes"),
];
