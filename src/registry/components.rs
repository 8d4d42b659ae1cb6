use super::{ComponentToken, ComponentTokenGroup};

const fn var(
    token: &'static str,
    value: &'static str,
    css_var: &'static str,
    property: &'static str,
    description: &'static str,
) -> ComponentToken {
    ComponentToken {
        token,
        value,
        css_var: Some(css_var),
        property: Some(property),
        description: Some(description),
    }
}

const fn bare(token: &'static str, value: &'static str) -> ComponentToken {
    ComponentToken {
        token,
        value,
        css_var: None,
        property: None,
        description: None,
    }
}

pub(super) const COMPONENT_TOKENS: &[ComponentTokenGroup] = &[
    ComponentTokenGroup {
        category: "cta",
        name: "Call to action",
        description: "Buttons and icon buttons.",
        tokens: &[
            var("cta.primary.background", "TP.interactive.primary", "--tp-cta-primary-bg", "background-color", "Primary CTA fill"),
            var("cta.primary.backgroundHover", "TP.interactive.primaryHover", "--tp-cta-primary-bg-hover", "background-color", "Primary CTA hover fill"),
            var("cta.primary.text", "TP.text.inverse", "--tp-cta-primary-fg", "color", "Primary CTA label"),
            var("cta.secondary.border", "TP.border.brand", "--tp-cta-secondary-border", "border-color", "Secondary CTA outline"),
            var("cta.danger.background", "TP.interactive.danger", "--tp-cta-danger-bg", "background-color", "Destructive CTA fill"),
            var("cta.radius", "TP.radius.md", "--tp-cta-radius", "border-radius", "CTA corner radius"),
            var("cta.focusRing", "TP.shadow.focus", "--tp-cta-focus", "box-shadow", "Keyboard focus ring"),
            var("cta.label", "TP.typography.Button", "--tp-cta-font", "font", "CTA label type"),
        ],
    },
    ComponentTokenGroup {
        category: "input",
        name: "Inputs",
        description: "Text fields, selects, dropdowns and chip inputs.",
        tokens: &[
            var("input.background", "TP.bg.surface", "--tp-input-bg", "background-color", "Field fill"),
            var("input.border", "TP.border.default", "--tp-input-border", "border-color", "Resting outline"),
            var("input.borderFocus", "TP.border.focus", "--tp-input-border-focus", "border-color", "Focused outline"),
            var("input.borderError", "TP.border.error", "--tp-input-border-error", "border-color", "Invalid outline"),
            var("input.placeholder", "TP.text.placeholder", "--tp-input-placeholder", "color", "Placeholder text"),
            var("input.height", "40px", "--tp-input-height", "height", "Default field height"),
            var("input.paddingX", "TP.spacing.3", "--tp-input-padding-x", "padding-inline", "Horizontal padding"),
            var("input.radius", "TP.radius.md", "--tp-input-radius", "border-radius", "Field corner radius"),
            var("input.shadow", "TP.shadow.xs", "--tp-input-shadow", "box-shadow", "Resting elevation"),
            var("input.chip.background", "TP.bg.brandMuted", "--tp-chip-bg", "background-color", "Chip fill in chip inputs"),
        ],
    },
    ComponentTokenGroup {
        category: "data",
        name: "Data display",
        description: "Tables, lists and key-value readouts.",
        tokens: &[
            var("data.table.headerBackground", "TP.bg.muted", "--tp-table-header-bg", "background-color", "Header row fill"),
            var("data.table.rowBorder", "TP.border.subtle", "--tp-table-row-border", "border-bottom-color", "Row separator"),
            var("data.table.rowHover", "TP.bg.canvas", "--tp-table-row-hover", "background-color", "Row hover fill"),
            var("data.table.rowSelected", "TP.bg.brandSubtle", "--tp-table-row-selected", "background-color", "Selected row fill"),
            var("data.table.cellPadding", "TP.spacing.3", "--tp-table-cell-padding", "padding", "Cell padding"),
            var("data.label", "TP.text.secondary", "--tp-data-label", "color", "Key label color"),
            var("data.value", "TP.text.primary", "--tp-data-value", "color", "Value color"),
            bare("data.value.font", "TP.typography.Body Small"),
        ],
    },
    ComponentTokenGroup {
        category: "card",
        name: "Cards",
        description: "Containers for grouped content.",
        tokens: &[
            var("card.background", "TP.bg.surface", "--tp-card-bg", "background-color", "Card fill"),
            var("card.border", "TP.border.default", "--tp-card-border", "border-color", "Card outline"),
            var("card.radius", "TP.radius.lg", "--tp-card-radius", "border-radius", "Card corner radius"),
            var("card.padding", "TP.spacing.4", "--tp-card-padding", "padding", "Card padding"),
            var("card.shadow", "TP.shadow.sm", "--tp-card-shadow", "box-shadow", "Resting card elevation"),
            var("card.shadowRaised", "TP.shadow.lg", "--tp-card-shadow-raised", "box-shadow", "Hovered or raised card"),
        ],
    },
    ComponentTokenGroup {
        category: "navigation",
        name: "Navigation",
        description: "Sidebar, top bar and tabs.",
        tokens: &[
            var("navigation.sidebar.width", "280px", "--tp-sidebar-width", "width", "Expanded sidebar width"),
            var("navigation.sidebar.background", "TP.bg.surface", "--tp-sidebar-bg", "background-color", "Sidebar fill"),
            var("navigation.item.active", "TP.bg.brandSubtle", "--tp-nav-item-active", "background-color", "Active item fill"),
            var("navigation.item.activeText", "TP.text.brand", "--tp-nav-item-active-fg", "color", "Active item label"),
            var("navigation.tab.indicator", "TP.interactive.primary", "--tp-tab-indicator", "border-bottom-color", "Selected tab indicator"),
            bare("navigation.header.height", "64px"),
        ],
    },
    ComponentTokenGroup {
        category: "feedback",
        name: "Feedback",
        description: "Alerts, toasts and badges.",
        tokens: &[
            var("feedback.success.background", "TP.bg.success", "--tp-alert-success-bg", "background-color", "Success alert fill"),
            var("feedback.success.icon", "TP.icon.success", "--tp-alert-success-icon", "color", "Success alert icon"),
            var("feedback.warning.background", "TP.bg.warning", "--tp-alert-warning-bg", "background-color", "Warning alert fill"),
            var("feedback.error.background", "TP.bg.error", "--tp-alert-error-bg", "background-color", "Error alert fill"),
            var("feedback.error.text", "TP.text.error", "--tp-alert-error-fg", "color", "Error alert copy"),
            var("feedback.info.background", "TP.bg.info", "--tp-alert-info-bg", "background-color", "Info alert fill"),
            var("feedback.toast.shadow", "TP.shadow.lg", "--tp-toast-shadow", "box-shadow", "Toast elevation"),
            var("feedback.badge.radius", "TP.radius.full", "--tp-badge-radius", "border-radius", "Pill badges"),
        ],
    },
    ComponentTokenGroup {
        category: "overlay",
        name: "Overlays",
        description: "Modals, drawers and popovers.",
        tokens: &[
            var("overlay.scrim", "TP.bg.overlay", "--tp-scrim", "background-color", "Scrim base color"),
            var("overlay.scrimOpacity", "TP.opacity.60", "--tp-scrim-opacity", "opacity", "Scrim opacity"),
            var("overlay.modal.radius", "TP.radius.xl", "--tp-modal-radius", "border-radius", "Modal corner radius"),
            var("overlay.modal.shadow", "TP.shadow.xl", "--tp-modal-shadow", "box-shadow", "Modal elevation"),
            var("overlay.popover.shadow", "TP.shadow.md", "--tp-popover-shadow", "box-shadow", "Popover elevation"),
        ],
    },
];
