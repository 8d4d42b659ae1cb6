use super::{PrimitiveRef, SemanticToken, SemanticTokenCategory, SemanticTokenGroup, TokenPath};

const fn alias(
    token: &'static [&'static str],
    usage: &'static str,
    source: &'static str,
    value: &'static str,
) -> SemanticToken {
    SemanticToken {
        token: TokenPath::new(token),
        usage,
        source: PrimitiveRef::new(source),
        value,
    }
}

const TEXT: SemanticTokenCategory = SemanticTokenCategory {
    key: "text",
    name: "Text",
    description: "Foreground colors for copy, labels and inline links.",
    groups: &[
        SemanticTokenGroup {
            name: "Content",
            tokens: &[
                alias(&["TP", "text", "primary"], "Primary copy and values", "tp-slate-900", "#0F172A"),
                alias(&["TP", "text", "secondary"], "Supporting copy and labels", "tp-slate-600", "#475569"),
                alias(&["TP", "text", "tertiary"], "Meta information and timestamps", "tp-slate-500", "#64748B"),
                alias(&["TP", "text", "body"], "Long-form body text", "tp-slate-700", "#334155"),
                alias(&["TP", "text", "heading"], "Section and page headings", "tp-slate-800", "#1E293B"),
                alias(&["TP", "text", "placeholder"], "Input placeholders", "tp-slate-400", "#94A3B8"),
                alias(&["TP", "text", "disabled"], "Disabled labels and values", "tp-slate-400", "#94A3B8"),
            ],
        },
        SemanticTokenGroup {
            name: "Emphasis",
            tokens: &[
                alias(&["TP", "text", "brand"], "Brand-colored emphasis", "tp-blue-500", "#4B4AD5"),
                alias(&["TP", "text", "link"], "Inline links", "tp-blue-600", "#3C3BB5"),
                alias(&["TP", "text", "linkHover"], "Inline link hover", "tp-blue-700", "#2F2E91"),
                alias(&["TP", "text", "inverse"], "Text on dark or brand fills", "tp-base-white", "#FFFFFF"),
                alias(&["TP", "text", "accent"], "Highlighted secondary emphasis", "tp-violet-600", "#7038C2"),
            ],
        },
        SemanticTokenGroup {
            name: "Status",
            tokens: &[
                alias(&["TP", "text", "success"], "Positive outcomes and confirmations", "tp-success-700", "#027A48"),
                alias(&["TP", "text", "warning"], "Cautions and pending states", "tp-warning-700", "#B54708"),
                alias(&["TP", "text", "error"], "Validation errors and critical flags", "tp-error-600", "#D92D20"),
                alias(&["TP", "text", "info"], "Informational notes", "tp-info-700", "#175CD3"),
            ],
        },
    ],
};

const BACKGROUND: SemanticTokenCategory = SemanticTokenCategory {
    key: "background",
    name: "Background",
    description: "Fills for canvases, surfaces and tinted containers.",
    groups: &[
        SemanticTokenGroup {
            name: "Surfaces",
            tokens: &[
                alias(&["TP", "bg", "canvas"], "Application canvas", "tp-slate-50", "#F8FAFC"),
                alias(&["TP", "bg", "surface"], "Cards, panels and inputs", "tp-base-white", "#FFFFFF"),
                alias(&["TP", "bg", "muted"], "Table headers and muted panels", "tp-slate-100", "#F1F5F9"),
                alias(&["TP", "bg", "sunken"], "Wells and recessed areas", "tp-slate-200", "#E2E8F0"),
                alias(&["TP", "bg", "inverse"], "Tooltips and dark surfaces", "tp-slate-900", "#0F172A"),
                alias(&["TP", "bg", "overlay"], "Modal scrim base", "tp-base-black", "#000000"),
            ],
        },
        SemanticTokenGroup {
            name: "Brand",
            tokens: &[
                alias(&["TP", "bg", "brand"], "Solid brand fill", "tp-blue-500", "#4B4AD5"),
                alias(&["TP", "bg", "brandSubtle"], "Selected rows and active nav items", "tp-blue-50", "#EEEEFF"),
                alias(&["TP", "bg", "brandMuted"], "Brand chips and tags", "tp-blue-100", "#E0E0FD"),
                alias(&["TP", "bg", "accentSubtle"], "Highlight callouts", "tp-violet-50", "#F5F0FF"),
            ],
        },
        SemanticTokenGroup {
            name: "Status",
            tokens: &[
                alias(&["TP", "bg", "success"], "Success banners and badges", "tp-success-50", "#ECFDF3"),
                alias(&["TP", "bg", "warning"], "Warning banners and badges", "tp-warning-50", "#FFFAEB"),
                alias(&["TP", "bg", "error"], "Error banners and invalid fields", "tp-error-50", "#FEF3F2"),
                alias(&["TP", "bg", "info"], "Informational banners", "tp-info-50", "#EFF8FF"),
            ],
        },
    ],
};

const BORDER: SemanticTokenCategory = SemanticTokenCategory {
    key: "border",
    name: "Border",
    description: "Strokes for containers, dividers and interactive outlines.",
    groups: &[
        SemanticTokenGroup {
            name: "Structure",
            tokens: &[
                alias(&["TP", "border", "default"], "Card and input outlines", "tp-slate-200", "#E2E8F0"),
                alias(&["TP", "border", "strong"], "Emphasized dividers", "tp-slate-300", "#CBD5E1"),
                alias(&["TP", "border", "subtle"], "Row separators", "tp-slate-100", "#F1F5F9"),
                alias(&["TP", "border", "inverse"], "Borders on dark surfaces", "tp-slate-700", "#334155"),
            ],
        },
        SemanticTokenGroup {
            name: "Interactive",
            tokens: &[
                alias(&["TP", "border", "focus"], "Focused input outline", "tp-blue-500", "#4B4AD5"),
                alias(&["TP", "border", "brand"], "Brand-tinted containers", "tp-blue-200", "#C2C1FB"),
                alias(&["TP", "border", "error"], "Invalid input outline", "tp-error-500", "#F04438"),
                alias(&["TP", "border", "success"], "Validated input outline", "tp-success-500", "#12B76A"),
                alias(&["TP", "border", "warning"], "Warning container outline", "tp-warning-500", "#F79009"),
            ],
        },
    ],
};

const ICON: SemanticTokenCategory = SemanticTokenCategory {
    key: "icon",
    name: "Icon",
    description: "Glyph colors for standalone and inline icons.",
    groups: &[
        SemanticTokenGroup {
            name: "Default",
            tokens: &[
                alias(&["TP", "icon", "primary"], "Default icons", "tp-slate-700", "#334155"),
                alias(&["TP", "icon", "secondary"], "Supporting icons", "tp-slate-500", "#64748B"),
                alias(&["TP", "icon", "disabled"], "Disabled icons", "tp-slate-300", "#CBD5E1"),
                alias(&["TP", "icon", "brand"], "Brand icons", "tp-blue-500", "#4B4AD5"),
                alias(&["TP", "icon", "inverse"], "Icons on dark or brand fills", "tp-base-white", "#FFFFFF"),
            ],
        },
        SemanticTokenGroup {
            name: "Status",
            tokens: &[
                alias(&["TP", "icon", "success"], "Success icons", "tp-success-600", "#039855"),
                alias(&["TP", "icon", "warning"], "Warning icons", "tp-warning-600", "#DC6803"),
                alias(&["TP", "icon", "error"], "Error icons", "tp-error-600", "#D92D20"),
                alias(&["TP", "icon", "info"], "Info icons", "tp-info-600", "#1570EF"),
            ],
        },
    ],
};

const INTERACTIVE: SemanticTokenCategory = SemanticTokenCategory {
    key: "interactive",
    name: "Interactive",
    description: "Fills for controls across rest, hover, pressed and disabled states.",
    groups: &[
        SemanticTokenGroup {
            name: "Primary",
            tokens: &[
                alias(&["TP", "interactive", "primary"], "Primary control fill", "tp-blue-500", "#4B4AD5"),
                alias(&["TP", "interactive", "primaryHover"], "Primary control hover", "tp-blue-600", "#3C3BB5"),
                alias(&["TP", "interactive", "primaryPressed"], "Primary control pressed", "tp-blue-700", "#2F2E91"),
                alias(&["TP", "interactive", "focusRing"], "Keyboard focus ring", "tp-blue-300", "#A2A1F5"),
            ],
        },
        SemanticTokenGroup {
            name: "Neutral",
            tokens: &[
                alias(&["TP", "interactive", "neutral"], "Neutral control fill", "tp-slate-100", "#F1F5F9"),
                alias(&["TP", "interactive", "neutralHover"], "Neutral control hover", "tp-slate-200", "#E2E8F0"),
                alias(&["TP", "interactive", "disabled"], "Disabled control fill", "tp-slate-300", "#CBD5E1"),
                alias(&["TP", "interactive", "selected"], "Selected option fill", "tp-blue-50", "#EEEEFF"),
            ],
        },
        SemanticTokenGroup {
            name: "Destructive",
            tokens: &[
                alias(&["TP", "interactive", "danger"], "Destructive control fill", "tp-error-600", "#D92D20"),
                alias(&["TP", "interactive", "dangerHover"], "Destructive control hover", "tp-error-700", "#B42318"),
            ],
        },
    ],
};

pub(super) const SEMANTIC_CATEGORIES: &[SemanticTokenCategory] =
    &[TEXT, BACKGROUND, BORDER, ICON, INTERACTIVE];
