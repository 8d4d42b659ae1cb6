use super::{ColorEntry, ColorGroup, TokenKey};

const fn step(token: u16, value: &'static str, usage: &'static str) -> ColorEntry {
    ColorEntry {
        token: TokenKey::Step(token),
        value,
        usage: Some(usage),
    }
}

const fn named(token: &'static str, value: &'static str, usage: &'static str) -> ColorEntry {
    ColorEntry {
        token: TokenKey::Name(token),
        value,
        usage: Some(usage),
    }
}

pub(super) const TP_BLUE: ColorGroup = ColorGroup {
    key: "primary",
    slug: "tp-blue",
    name: "TP Blue",
    description: "Primary brand scale. Drives CTAs, links, focus rings and selected states.",
    colors: &[
        step(50, "#EEEEFF", "Selected row and hover tint"),
        step(100, "#E0E0FD", "Subtle brand surface"),
        step(200, "#C2C1FB", "Brand border on tinted surfaces"),
        step(300, "#A2A1F5", "Focus ring halo"),
        step(400, "#7877E8", "Brand icon on dark surfaces"),
        step(500, "#4B4AD5", "Primary brand color"),
        step(600, "#3C3BB5", "Primary CTA hover"),
        step(700, "#2F2E91", "Primary CTA pressed"),
        step(800, "#23226D", "Brand text on tinted surfaces"),
        step(900, "#18174A", "Deepest brand accent"),
    ],
};

pub(super) const TP_VIOLET: ColorGroup = ColorGroup {
    key: "secondary",
    slug: "tp-violet",
    name: "TP Violet",
    description: "Secondary accent scale used for highlights, badges and gradient ends.",
    colors: &[
        step(50, "#F5F0FF", "Highlight surface"),
        step(100, "#EBDFFF", "Badge surface"),
        step(200, "#D6BFFF", "Highlight border"),
        step(300, "#BE9BFA", "Decorative accent"),
        step(400, "#A273F0", "Accent icon"),
        step(500, "#8A4FE0", "Secondary accent color"),
        step(600, "#7038C2", "Accent hover"),
        step(700, "#582C9B", "Accent pressed"),
        step(800, "#412073", "Accent text on tinted surfaces"),
        step(900, "#2B154D", "Deepest accent"),
    ],
};

pub(super) const TP_SLATE: ColorGroup = ColorGroup {
    key: "neutral",
    slug: "tp-slate",
    name: "TP Slate",
    description: "Neutral scale for text, surfaces, borders and dividers.",
    colors: &[
        step(50, "#F8FAFC", "App canvas"),
        step(100, "#F1F5F9", "Muted surface"),
        step(200, "#E2E8F0", "Default border and divider"),
        step(300, "#CBD5E1", "Strong border, disabled fill"),
        step(400, "#94A3B8", "Placeholder and disabled text"),
        step(500, "#64748B", "Tertiary text"),
        step(600, "#475569", "Secondary text"),
        step(700, "#334155", "Body text"),
        step(800, "#1E293B", "Headings"),
        step(900, "#0F172A", "Primary text and overlays"),
    ],
};

pub(super) const TP_BASE: ColorGroup = ColorGroup {
    key: "base",
    slug: "tp-base",
    name: "TP Base",
    description: "Absolute white and black anchors.",
    colors: &[
        named("white", "#FFFFFF", "Card and input surfaces, inverse text"),
        named("black", "#000000", "Scrim base"),
    ],
};

pub(super) const TP_GRADIENT: ColorGroup = ColorGroup {
    key: "gradient",
    slug: "tp-gradient",
    name: "TP Gradient",
    description: "Named anchor colors for brand gradients.",
    colors: &[
        named("start", "#4B4AD5", "Brand gradient start"),
        named("mid", "#6B4CDB", "Brand gradient midpoint"),
        named("end", "#8A4FE0", "Brand gradient end"),
    ],
};
