use super::{
    CtaSizeToken, CtaVariantToken, DimensionToken, GradientStop, GradientToken, GridToken,
    OpacityToken, ShadowLayer, ShadowToken,
};

const fn dim(token: &'static str, px: f64, usage: &'static str) -> DimensionToken {
    DimensionToken { token, px, usage }
}

pub(super) const SPACING: &[DimensionToken] = &[
    dim("0", 0.0, "Reset"),
    dim("1", 4.0, "Icon-to-label gap"),
    dim("2", 8.0, "Tight stacks, chip padding"),
    dim("3", 12.0, "Input horizontal padding"),
    dim("4", 16.0, "Default stack gap, card padding"),
    dim("5", 20.0, "Form row gap"),
    dim("6", 24.0, "Section padding"),
    dim("8", 32.0, "Panel padding"),
    dim("10", 40.0, "Large section gap"),
    dim("12", 48.0, "Page gutters"),
    dim("16", 64.0, "Page header offset"),
    dim("20", 80.0, "Hero spacing"),
];

pub(super) const RADIUS: &[DimensionToken] = &[
    dim("none", 0.0, "Square corners"),
    dim("xs", 2.0, "Checkbox"),
    dim("sm", 4.0, "Tags and badges"),
    dim("md", 8.0, "Inputs and CTAs"),
    dim("lg", 12.0, "Cards"),
    dim("xl", 16.0, "Modals and sheets"),
    dim("2xl", 24.0, "Feature panels"),
    dim("full", 9999.0, "Pills and avatars"),
];

pub(super) const SIZING: &[DimensionToken] = &[
    dim("icon-xs", 12.0, "Inline status glyphs"),
    dim("icon-sm", 16.0, "Icons inside inputs and small CTAs"),
    dim("icon-md", 20.0, "Default icon"),
    dim("icon-lg", 24.0, "Navigation icons"),
    dim("avatar-sm", 32.0, "Compact avatars"),
    dim("avatar-md", 40.0, "Default avatars"),
    dim("avatar-lg", 56.0, "Patient header avatar"),
    dim("control-sm", 32.0, "Compact controls"),
    dim("control-md", 40.0, "Default controls"),
    dim("control-lg", 48.0, "Touch-friendly controls"),
    dim("header", 64.0, "Top bar height"),
    dim("sidebar", 280.0, "Expanded sidebar width"),
    dim("sidebar-collapsed", 72.0, "Collapsed sidebar width"),
];

pub(super) const BORDER_WIDTH: &[DimensionToken] = &[
    dim("none", 0.0, "No border"),
    dim("thin", 1.0, "Default borders"),
    dim("medium", 2.0, "Focus and selected outlines"),
    dim("thick", 4.0, "Accent bars"),
];

const fn opacity(token: &'static str, value: f64, usage: &'static str) -> OpacityToken {
    OpacityToken {
        token,
        value,
        usage,
    }
}

pub(super) const OPACITY: &[OpacityToken] = &[
    opacity("0", 0.0, "Hidden"),
    opacity("5", 0.05, "Hover wash"),
    opacity("10", 0.1, "Pressed wash"),
    opacity("20", 0.2, "Subtle scrim"),
    opacity("40", 0.4, "Disabled content"),
    opacity("60", 0.6, "Modal scrim"),
    opacity("80", 0.8, "Heavy scrim"),
    opacity("100", 1.0, "Opaque"),
];

const SHADOW_INK: &str = "#0F172A";

const fn layer(x: f64, y: f64, blur: f64, spread: f64, alpha: f64) -> ShadowLayer {
    ShadowLayer {
        x,
        y,
        blur,
        spread,
        color: SHADOW_INK,
        alpha,
    }
}

pub(super) const SHADOWS: &[ShadowToken] = &[
    ShadowToken {
        token: "none",
        layers: &[],
        usage: "Flat surfaces",
    },
    ShadowToken {
        token: "xs",
        layers: &[layer(0.0, 1.0, 2.0, 0.0, 0.05)],
        usage: "Inputs",
    },
    ShadowToken {
        token: "sm",
        layers: &[layer(0.0, 1.0, 2.0, 0.0, 0.06), layer(0.0, 1.0, 3.0, 0.0, 0.1)],
        usage: "Resting cards",
    },
    ShadowToken {
        token: "md",
        layers: &[layer(0.0, 2.0, 4.0, -2.0, 0.06), layer(0.0, 4.0, 8.0, -2.0, 0.1)],
        usage: "Dropdown menus",
    },
    ShadowToken {
        token: "lg",
        layers: &[layer(0.0, 4.0, 6.0, -2.0, 0.05), layer(0.0, 12.0, 16.0, -4.0, 0.1)],
        usage: "Raised cards and popovers",
    },
    ShadowToken {
        token: "xl",
        layers: &[layer(0.0, 8.0, 8.0, -4.0, 0.04), layer(0.0, 20.0, 24.0, -4.0, 0.1)],
        usage: "Modals and sheets",
    },
    ShadowToken {
        token: "focus",
        layers: &[ShadowLayer {
            x: 0.0,
            y: 0.0,
            blur: 0.0,
            spread: 4.0,
            color: "#A2A1F5",
            alpha: 0.5,
        }],
        usage: "Keyboard focus ring",
    },
];

pub(super) const GRADIENTS: &[GradientToken] = &[
    GradientToken {
        token: "brand",
        angle: 135,
        stops: &[
            GradientStop {
                color: "#4B4AD5",
                position: 0.0,
            },
            GradientStop {
                color: "#8A4FE0",
                position: 100.0,
            },
        ],
        usage: "Hero banners and featured CTAs",
    },
    GradientToken {
        token: "brand-vivid",
        angle: 90,
        stops: &[
            GradientStop {
                color: "#4B4AD5",
                position: 0.0,
            },
            GradientStop {
                color: "#6B4CDB",
                position: 50.0,
            },
            GradientStop {
                color: "#8A4FE0",
                position: 100.0,
            },
        ],
        usage: "Progress indicators",
    },
    GradientToken {
        token: "brand-subtle",
        angle: 180,
        stops: &[
            GradientStop {
                color: "#EEEEFF",
                position: 0.0,
            },
            GradientStop {
                color: "#F5F0FF",
                position: 100.0,
            },
        ],
        usage: "Onboarding panels",
    },
    GradientToken {
        token: "success",
        angle: 135,
        stops: &[
            GradientStop {
                color: "#12B76A",
                position: 0.0,
            },
            GradientStop {
                color: "#027A48",
                position: 100.0,
            },
        ],
        usage: "Completion states",
    },
    GradientToken {
        token: "surface",
        angle: 180,
        stops: &[
            GradientStop {
                color: "#FFFFFF",
                position: 0.0,
            },
            GradientStop {
                color: "#F8FAFC",
                position: 100.0,
            },
        ],
        usage: "Sticky footers fading into canvas",
    },
];

pub(super) const GRID: &[GridToken] = &[
    GridToken {
        token: "mobile",
        columns: 4,
        gutter: 16.0,
        margin: 16.0,
        min_width: 0.0,
        max_content_width: None,
        usage: "Phones",
    },
    GridToken {
        token: "tablet",
        columns: 8,
        gutter: 24.0,
        margin: 32.0,
        min_width: 768.0,
        max_content_width: None,
        usage: "Tablets and narrow windows",
    },
    GridToken {
        token: "desktop",
        columns: 12,
        gutter: 24.0,
        margin: 48.0,
        min_width: 1280.0,
        max_content_width: Some(1200.0),
        usage: "Default workstation layout",
    },
    GridToken {
        token: "wide",
        columns: 12,
        gutter: 32.0,
        margin: 80.0,
        min_width: 1536.0,
        max_content_width: Some(1440.0),
        usage: "Large clinic displays",
    },
];

pub(super) const CTA_SIZES: &[CtaSizeToken] = &[
    CtaSizeToken {
        token: "xs",
        height: 28.0,
        padding_x: 10.0,
        font_size: 12.0,
        icon_size: 14.0,
        gap: 4.0,
        radius: "sm",
        usage: "Inline table actions",
    },
    CtaSizeToken {
        token: "sm",
        height: 32.0,
        padding_x: 12.0,
        font_size: 13.0,
        icon_size: 16.0,
        gap: 6.0,
        radius: "md",
        usage: "Toolbars and dense forms",
    },
    CtaSizeToken {
        token: "md",
        height: 40.0,
        padding_x: 16.0,
        font_size: 14.0,
        icon_size: 18.0,
        gap: 8.0,
        radius: "md",
        usage: "Default",
    },
    CtaSizeToken {
        token: "lg",
        height: 48.0,
        padding_x: 20.0,
        font_size: 16.0,
        icon_size: 20.0,
        gap: 8.0,
        radius: "lg",
        usage: "Primary page actions",
    },
];

pub(super) const CTA_VARIANTS: &[CtaVariantToken] = &[
    CtaVariantToken {
        token: "primary",
        background: "#4B4AD5",
        text: "#FFFFFF",
        border: "#4B4AD5",
        hover_background: "#3C3BB5",
        pressed_background: "#2F2E91",
        disabled_opacity: "40",
        usage: "Single most important action",
    },
    CtaVariantToken {
        token: "secondary",
        background: "#FFFFFF",
        text: "#4B4AD5",
        border: "#C2C1FB",
        hover_background: "#EEEEFF",
        pressed_background: "#E0E0FD",
        disabled_opacity: "40",
        usage: "Supporting actions",
    },
    CtaVariantToken {
        token: "tertiary",
        background: "#F1F5F9",
        text: "#334155",
        border: "#F1F5F9",
        hover_background: "#E2E8F0",
        pressed_background: "#CBD5E1",
        disabled_opacity: "40",
        usage: "Low-emphasis actions",
    },
    CtaVariantToken {
        token: "ghost",
        background: "#FFFFFF",
        text: "#475569",
        border: "#FFFFFF",
        hover_background: "#F1F5F9",
        pressed_background: "#E2E8F0",
        disabled_opacity: "40",
        usage: "Icon buttons and toolbar actions",
    },
    CtaVariantToken {
        token: "danger",
        background: "#D92D20",
        text: "#FFFFFF",
        border: "#D92D20",
        hover_background: "#B42318",
        pressed_background: "#912018",
        disabled_opacity: "40",
        usage: "Destructive actions",
    },
];
