//! Static HTML preview: token custom properties, swatches and the CTA and
//! input state matrices, each sample annotated with the tokens it uses.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::Value;

use super::{registry_metadata, Compiler, Document, ExportContext};
use crate::registry::{
    format_number, px, ComponentToken, CtaSizeToken, CtaVariantToken, Registry,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPreview;

const ID: &str = "figma-preview";
const CTA_STATES: [&str; 5] = ["default", "hover", "pressed", "focus", "disabled"];
const INPUT_STATES: [&str; 6] = ["default", "hover", "focus", "filled", "error", "disabled"];

impl Compiler for HtmlPreview {
    fn id(&self) -> &'static str {
        ID
    }

    fn label(&self) -> &'static str {
        "Figma HTML Preview"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn compile(&self, registry: &Registry, context: &ExportContext) -> Document {
        let title = format!("{} Design Tokens v{}", context.system_name, context.version);
        let metadata = script_json(&registry_metadata(registry, context, ID));

        let page = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (title) }
                    style {
                        (PreEscaped(root_properties(registry)))
                        (PreEscaped(BASE_STYLES))
                    }
                }
                body {
                    h1 { (title) }
                    (swatches(registry))
                    (cta_matrix(registry))
                    (input_matrix(registry))
                    script type="application/json" id="token-metadata" { (PreEscaped(metadata)) }
                }
            }
        };

        Document::Html(page.into_string())
    }
}

const BASE_STYLES: &str = r#"body { font-family: Inter, system-ui, sans-serif; color: var(--tp-text-primary); background: var(--tp-bg-canvas); margin: 0; padding: 32px; }
h2 { margin-top: 48px; }
.swatches { display: grid; grid-template-columns: repeat(auto-fill, minmax(120px, 1fr)); gap: 12px; }
.swatch { border: 1px solid var(--tp-border-subtle); border-radius: 8px; overflow: hidden; font-size: 12px; }
.swatch .chip { height: 56px; }
.swatch .meta { padding: 8px; }
table.matrix { border-collapse: collapse; margin-top: 16px; }
table.matrix th, table.matrix td { border: 1px solid var(--tp-border-subtle); padding: 12px; vertical-align: top; text-align: left; }
.sample { display: inline-flex; align-items: center; justify-content: center; border-style: solid; border-width: 1px; font-weight: 600; }
.annotation { display: block; margin-top: 6px; font-size: 11px; color: var(--tp-text-tertiary); font-family: "JetBrains Mono", monospace; }
.field { display: block; width: 220px; box-sizing: border-box; border-style: solid; border-width: 1px; }
"#;

fn root_properties(registry: &Registry) -> String {
    let mut css = String::from(":root {\n");
    for property in registry.custom_properties() {
        let value = if property.component {
            css_value(registry, &property.value)
        } else {
            property.value
        };
        css.push_str(&format!("  {}: {value};\n", property.name));
    }
    css.push_str("}\n");
    css
}

/// CSS expression for a component token value: custom property for `TP.`
/// pointers, the literal otherwise.
fn css_value(registry: &Registry, value: &str) -> String {
    let Some(rest) = value.strip_prefix("TP.") else {
        return value.to_string();
    };
    let (scale, token) = rest.split_once('.').unwrap_or((rest, ""));
    match scale {
        "shadow" | "radius" | "spacing" | "sizing" => format!("var(--tp-{scale}-{token})"),
        "opacity" => registry
            .opacity
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| format_number(entry.value))
            .unwrap_or_else(|| value.to_string()),
        "borderWidth" => registry
            .border_width
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.css())
            .unwrap_or_else(|| value.to_string()),
        "typography" => registry
            .typography_token(token)
            .map(|entry| {
                format!(
                    "{} {}/{} {}",
                    entry.font_weight,
                    entry.font_size_css(),
                    entry.line_height_css(),
                    entry.font_family
                )
            })
            .unwrap_or_else(|| value.to_string()),
        "gradient" => registry
            .gradients
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.css())
            .unwrap_or_else(|| value.to_string()),
        _ => registry
            .semantic_tokens()
            .find(|(_, _, semantic)| semantic.token.dotted() == value)
            .map(|(_, _, semantic)| format!("var({})", semantic.token.css_var()))
            .unwrap_or_else(|| value.to_string()),
    }
}

fn swatches(registry: &Registry) -> Markup {
    html! {
        section id="colors" {
            h2 { "Colors" }
            @for scale in registry.color_scales() {
                h3 { (scale.name) }
                div class="swatches" {
                    @for entry in scale.colors {
                        div class="swatch" {
                            div class="chip" style=(format!("background: var(--{})", scale.reference(entry))) {}
                            div class="meta" {
                                strong { (entry.token.to_string()) }
                                br;
                                (entry.value)
                            }
                        }
                    }
                }
            }
            h3 { "Semantic" }
            div class="swatches" {
                @for (_, _, token) in registry.semantic_tokens() {
                    div class="swatch" {
                        div class="chip" style=(format!("background: var({})", token.token.css_var())) {}
                        div class="meta" {
                            strong { (token.token.dotted()) }
                            br;
                            (token.source.as_str()) " \u{2192} " (token.value)
                        }
                    }
                }
            }
        }
    }
}

fn cta_matrix(registry: &Registry) -> Markup {
    html! {
        section id="cta" {
            h2 { "CTA variants \u{d7} sizes \u{d7} states" }
            @for variant in registry.cta_variants {
                h3 { (variant.token) " " small { (variant.usage) } }
                table class="matrix" {
                    tr {
                        th { "size" }
                        @for state in CTA_STATES {
                            th { (state) }
                        }
                    }
                    @for size in registry.cta_sizes {
                        tr {
                            th {
                                (size.token)
                                span class="annotation" { (px(size.height)) " tall" }
                            }
                            @for state in CTA_STATES {
                                td {
                                    span class="sample" style=(cta_style(registry, variant, size, state)) { "Button" }
                                    span class="annotation" { (cta_annotation(registry, variant, size, state)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cta_style(registry: &Registry, variant: &CtaVariantToken, size: &CtaSizeToken, state: &str) -> String {
    let background = match state {
        "hover" => variant.hover_background,
        "pressed" => variant.pressed_background,
        _ => variant.background,
    };
    let mut style = format!(
        "background: {background}; color: {}; border-color: {}; height: {}; padding: 0 {}; font-size: {}; gap: {}; border-radius: var(--tp-radius-{});",
        variant.text,
        variant.border,
        px(size.height),
        px(size.padding_x),
        px(size.font_size),
        px(size.gap),
        size.radius,
    );
    match state {
        "focus" => style.push_str(" box-shadow: var(--tp-shadow-focus);"),
        "disabled" => {
            if let Some(opacity) = registry
                .opacity
                .iter()
                .find(|entry| entry.token == variant.disabled_opacity)
            {
                style.push_str(&format!(" opacity: {};", format_number(opacity.value)));
            }
        }
        _ => {}
    }
    style
}

fn cta_annotation(registry: &Registry, variant: &CtaVariantToken, size: &CtaSizeToken, state: &str) -> String {
    let (label, background) = match state {
        "hover" => ("bg-hover", variant.hover_background),
        "pressed" => ("bg-pressed", variant.pressed_background),
        _ => ("bg", variant.background),
    };
    let mut notes = vec![
        format!("{label}: {}", describe_hex(registry, background)),
        format!("text: {}", describe_hex(registry, variant.text)),
        format!("radius: TP.radius.{}", size.radius),
    ];
    match state {
        "focus" => notes.push("ring: TP.shadow.focus".to_string()),
        "disabled" => notes.push(format!("opacity: TP.opacity.{}", variant.disabled_opacity)),
        _ => {}
    }
    notes.join(" \u{b7} ")
}

/// `#4B4AD5 (tp-blue-500)` when the hex matches a primitive.
fn describe_hex(registry: &Registry, hex: &str) -> String {
    registry
        .color_scales()
        .iter()
        .find_map(|scale| {
            scale
                .colors
                .iter()
                .find(|entry| entry.value.eq_ignore_ascii_case(hex))
                .map(|entry| format!("{hex} ({})", scale.reference(entry)))
        })
        .unwrap_or_else(|| hex.to_string())
}

struct InputSample {
    style: String,
    text: &'static str,
    annotation: String,
}

impl InputSample {
    fn new(registry: &Registry, tokens: &[ComponentToken], state: &str) -> Self {
        let border_token = match state {
            "focus" => "input.borderFocus",
            "error" => "input.borderError",
            _ => "input.border",
        };
        let border = tokens
            .iter()
            .find(|token| token.token == border_token)
            .map(|token| token.value);

        let mut style = vec![
            "background: var(--tp-input-bg)".to_string(),
            "border-radius: var(--tp-input-radius)".to_string(),
            "height: var(--tp-input-height)".to_string(),
            "padding: 0 var(--tp-input-padding-x)".to_string(),
            "box-shadow: var(--tp-input-shadow)".to_string(),
        ];
        if let Some(value) = border {
            style.push(format!("border-color: {}", css_value(registry, value)));
        }
        let text_color = match state {
            "filled" | "error" => "var(--tp-text-primary)",
            "disabled" => "var(--tp-text-disabled)",
            _ => "var(--tp-input-placeholder)",
        };
        style.push(format!("color: {text_color}"));
        if state == "disabled" {
            style.push("background: var(--tp-interactive-disabled)".to_string());
        }
        style.push("line-height: var(--tp-input-height)".to_string());

        Self {
            style: style.join("; "),
            text: match state {
                "filled" | "error" => "Amoxicillin 500 mg",
                _ => "Search medications",
            },
            annotation: border
                .map(|value| format!("{border_token}: {value}"))
                .unwrap_or_default(),
        }
    }
}

fn input_matrix(registry: &Registry) -> Markup {
    let tokens = registry.tokens_by_category("input");
    html! {
        section id="inputs" {
            h2 { "Input states" }
            table class="matrix" {
                tr {
                    @for state in INPUT_STATES {
                        th { (state) }
                    }
                }
                tr {
                    @for state in INPUT_STATES {
                        @let sample = InputSample::new(registry, tokens, state);
                        td {
                            span class="field" style=(sample.style) { (sample.text) }
                            span class="annotation" { (sample.annotation) }
                        }
                    }
                }
            }
        }
    }
}

/// Pretty JSON safe to place inside a `<script>` element.
fn script_json(value: &Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/")
}
