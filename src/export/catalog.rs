//! Hand-authored component contracts. Independent of the token registry
//! apart from the token names each component declares it consumes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub props: &'static [PropSpec],
    pub variants: &'static [&'static str],
    pub states: &'static [&'static str],
    pub sizes: &'static [&'static str],
    /// Component token names (`cta.radius`) or `TP.` pointers.
    pub token_refs: &'static [&'static str],
    pub anatomy: &'static [&'static str],
}

const fn prop(
    name: &'static str,
    kind: &'static str,
    required: bool,
    default: Option<&'static str>,
    description: &'static str,
) -> PropSpec {
    PropSpec {
        name,
        kind,
        required,
        default,
        description,
    }
}

const INTERACTIVE_STATES: &[&str] = &["default", "hover", "pressed", "focus", "disabled"];
const FIELD_STATES: &[&str] = &["default", "hover", "focus", "filled", "error", "disabled"];
const CTA_SIZES: &[&str] = &["xs", "sm", "md", "lg"];

static CATALOG: &[ComponentSpec] = &[
    ComponentSpec {
        name: "Button",
        category: "cta",
        description: "Primary call to action with optional leading or trailing icon.",
        props: &[
            prop("label", "string", true, None, "Visible text"),
            prop("variant", "ButtonVariant", false, Some("primary"), "Visual emphasis"),
            prop("size", "ButtonSize", false, Some("md"), "Height and padding preset"),
            prop("leadingIcon", "IconName", false, None, "Icon before the label"),
            prop("trailingIcon", "IconName", false, None, "Icon after the label"),
            prop("loading", "boolean", false, Some("false"), "Replaces the leading icon with a spinner"),
            prop("disabled", "boolean", false, Some("false"), "Blocks interaction"),
        ],
        variants: &["primary", "secondary", "tertiary", "ghost", "danger"],
        states: INTERACTIVE_STATES,
        sizes: CTA_SIZES,
        token_refs: &[
            "cta.primary.background",
            "cta.primary.backgroundHover",
            "cta.primary.text",
            "cta.secondary.border",
            "cta.danger.background",
            "cta.radius",
            "cta.focusRing",
            "cta.label",
        ],
        anatomy: &["container", "leadingIcon", "label", "trailingIcon", "focusRing"],
    },
    ComponentSpec {
        name: "IconButton",
        category: "cta",
        description: "Square button carrying a single icon and an accessible label.",
        props: &[
            prop("icon", "IconName", true, None, "Glyph to render"),
            prop("ariaLabel", "string", true, None, "Accessible name"),
            prop("variant", "ButtonVariant", false, Some("ghost"), "Visual emphasis"),
            prop("size", "ButtonSize", false, Some("md"), "Square dimension preset"),
        ],
        variants: &["primary", "secondary", "ghost"],
        states: INTERACTIVE_STATES,
        sizes: CTA_SIZES,
        token_refs: &["cta.radius", "cta.focusRing", "TP.icon.secondary", "TP.interactive.neutralHover"],
        anatomy: &["container", "icon", "focusRing"],
    },
    ComponentSpec {
        name: "TextField",
        category: "input",
        description: "Single-line text input with label, helper and error text.",
        props: &[
            prop("label", "string", true, None, "Field label"),
            prop("value", "string", false, None, "Controlled value"),
            prop("placeholder", "string", false, None, "Hint shown while empty"),
            prop("helperText", "string", false, None, "Guidance below the field"),
            prop("errorText", "string", false, None, "Validation message; switches to the error state"),
            prop("required", "boolean", false, Some("false"), "Marks the label with an asterisk"),
            prop("disabled", "boolean", false, Some("false"), "Blocks interaction"),
        ],
        variants: &["outlined"],
        states: FIELD_STATES,
        sizes: &["sm", "md", "lg"],
        token_refs: &[
            "input.background",
            "input.border",
            "input.borderFocus",
            "input.borderError",
            "input.placeholder",
            "input.height",
            "input.paddingX",
            "input.radius",
            "input.shadow",
        ],
        anatomy: &["label", "container", "input", "helperText", "errorText"],
    },
    ComponentSpec {
        name: "Select",
        category: "input",
        description: "Closed list picker rendered as a field with a dropdown menu.",
        props: &[
            prop("label", "string", true, None, "Field label"),
            prop("options", "Option[]", true, None, "Choices shown in the menu"),
            prop("value", "string", false, None, "Selected option value"),
            prop("searchable", "boolean", false, Some("false"), "Adds a filter box to the menu"),
            prop("disabled", "boolean", false, Some("false"), "Blocks interaction"),
        ],
        variants: &["outlined"],
        states: FIELD_STATES,
        sizes: &["sm", "md", "lg"],
        token_refs: &["input.border", "input.borderFocus", "input.radius", "overlay.popover.shadow", "TP.bg.brandSubtle"],
        anatomy: &["label", "container", "value", "chevron", "menu", "option"],
    },
    ComponentSpec {
        name: "ChipInput",
        category: "input",
        description: "Free-text entry that turns committed values into removable chips.",
        props: &[
            prop("label", "string", true, None, "Field label"),
            prop("values", "string[]", true, None, "Committed chips"),
            prop("suggestions", "string[]", false, None, "Autocomplete candidates"),
            prop("maxChips", "number", false, None, "Upper bound on committed chips"),
        ],
        variants: &["outlined"],
        states: FIELD_STATES,
        sizes: &["md"],
        token_refs: &["input.chip.background", "input.border", "input.borderFocus", "TP.radius.full"],
        anatomy: &["label", "container", "chip", "chipRemove", "input"],
    },
    ComponentSpec {
        name: "DataTable",
        category: "data",
        description: "Sortable table with selectable rows.",
        props: &[
            prop("columns", "Column[]", true, None, "Column definitions"),
            prop("rows", "Row[]", true, None, "Row data"),
            prop("selectable", "boolean", false, Some("false"), "Adds a checkbox column"),
            prop("dense", "boolean", false, Some("false"), "Reduces cell padding"),
        ],
        variants: &["default", "striped"],
        states: &["default", "rowHover", "rowSelected", "empty", "loading"],
        sizes: &["dense", "default"],
        token_refs: &[
            "data.table.headerBackground",
            "data.table.rowBorder",
            "data.table.rowHover",
            "data.table.rowSelected",
            "data.table.cellPadding",
        ],
        anatomy: &["header", "headerCell", "row", "cell", "selectionCheckbox"],
    },
    ComponentSpec {
        name: "Card",
        category: "card",
        description: "Surface grouping related content with an optional header and actions.",
        props: &[
            prop("title", "string", false, None, "Header title"),
            prop("actions", "Node", false, None, "Header trailing actions"),
            prop("raised", "boolean", false, Some("false"), "Uses the raised elevation"),
        ],
        variants: &["flat", "raised"],
        states: &["default", "hover"],
        sizes: &[],
        token_refs: &["card.background", "card.border", "card.radius", "card.padding", "card.shadow", "card.shadowRaised"],
        anatomy: &["container", "header", "title", "actions", "body"],
    },
    ComponentSpec {
        name: "Tabs",
        category: "navigation",
        description: "Horizontal tab list switching between sibling panels.",
        props: &[
            prop("tabs", "Tab[]", true, None, "Tab labels and ids"),
            prop("activeId", "string", true, None, "Selected tab id"),
        ],
        variants: &["underline"],
        states: &["default", "hover", "selected", "focus", "disabled"],
        sizes: &["md"],
        token_refs: &["navigation.tab.indicator", "navigation.item.activeText", "TP.text.secondary"],
        anatomy: &["list", "tab", "indicator", "panel"],
    },
    ComponentSpec {
        name: "Sidebar",
        category: "navigation",
        description: "Collapsible primary navigation rail.",
        props: &[
            prop("items", "NavItem[]", true, None, "Navigation entries"),
            prop("collapsed", "boolean", false, Some("false"), "Icon-only mode"),
        ],
        variants: &["expanded", "collapsed"],
        states: &["default", "hover", "active"],
        sizes: &[],
        token_refs: &[
            "navigation.sidebar.width",
            "navigation.sidebar.background",
            "navigation.item.active",
            "navigation.item.activeText",
            "TP.sizing.sidebar-collapsed",
        ],
        anatomy: &["container", "logo", "item", "itemIcon", "itemLabel", "collapseToggle"],
    },
    ComponentSpec {
        name: "Alert",
        category: "feedback",
        description: "Inline status message with icon and optional action.",
        props: &[
            prop("tone", "AlertTone", true, None, "success, warning, error or info"),
            prop("title", "string", false, None, "Bold lead-in"),
            prop("message", "string", true, None, "Body copy"),
            prop("dismissible", "boolean", false, Some("false"), "Shows a close button"),
        ],
        variants: &["success", "warning", "error", "info"],
        states: &["default"],
        sizes: &[],
        token_refs: &[
            "feedback.success.background",
            "feedback.success.icon",
            "feedback.warning.background",
            "feedback.error.background",
            "feedback.error.text",
            "feedback.info.background",
        ],
        anatomy: &["container", "icon", "title", "message", "action", "dismiss"],
    },
    ComponentSpec {
        name: "Badge",
        category: "feedback",
        description: "Compact pill label for counts and statuses.",
        props: &[
            prop("label", "string", true, None, "Badge text"),
            prop("tone", "BadgeTone", false, Some("neutral"), "Color family"),
        ],
        variants: &["neutral", "brand", "success", "warning", "error"],
        states: &["default"],
        sizes: &["sm", "md"],
        token_refs: &["feedback.badge.radius", "TP.bg.brandSubtle", "TP.text.brand"],
        anatomy: &["container", "label"],
    },
    ComponentSpec {
        name: "Modal",
        category: "overlay",
        description: "Blocking dialog over a scrim.",
        props: &[
            prop("open", "boolean", true, None, "Visibility"),
            prop("title", "string", true, None, "Dialog title"),
            prop("onClose", "() => void", true, None, "Dismiss callback"),
            prop("size", "ModalSize", false, Some("md"), "Maximum width preset"),
        ],
        variants: &["default", "destructive"],
        states: &["open", "closed"],
        sizes: &["sm", "md", "lg"],
        token_refs: &["overlay.scrim", "overlay.scrimOpacity", "overlay.modal.radius", "overlay.modal.shadow"],
        anatomy: &["scrim", "container", "header", "body", "footer", "close"],
    },
];

pub fn component_catalog() -> &'static [ComponentSpec] {
    CATALOG
}
