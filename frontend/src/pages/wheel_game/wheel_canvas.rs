use std::f64::consts::PI;

use spinwheel_shared::renderer::{label_style, layout, polar_point, to_radians, POINTER_CANVAS_DEG};
use spinwheel_shared::Roster;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 460;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub roster: Roster,
    pub rotation: f64,
    pub is_spinning: bool,
    pub highlight: Option<usize>,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_wheel(context: &CanvasRenderingContext2d, size: f64, props: &WheelCanvasProps) {
    let center = (size / 2.0, size / 2.0);
    let radius = size / 2.0 - 20.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, size, size);

    // Outer glow, stronger while spinning
    context.begin_path();
    let glow = if props.is_spinning { 0.25 } else { 0.15 };
    context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow));
    let _ = context.arc(center.0, center.1, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    let arcs = layout(&props.roster, props.rotation);

    for arc in &arcs {
        context.begin_path();
        context.move_to(center.0, center.1);
        let _ = context.arc(center.0, center.1, radius, arc.start, arc.end);
        context.close_path();
        context.set_fill_style_str(arc.color);
        context.fill();

        if props.highlight == Some(arc.index) {
            context.set_fill_style_str("rgba(255, 255, 255, 0.35)");
            context.fill();
        }

        context.set_stroke_style_str("#ffffff");
        context.set_line_width(3.0);
        context.stroke();
    }

    // Labels
    let style = label_style(props.is_spinning);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_global_alpha(style.alpha);
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(3.0);
    for arc in &arcs {
        let (x, y) = polar_point(center, radius * style.radius_factor, arc.mid);
        context.save();
        let _ = context.translate(x, y);
        let _ = context.rotate(arc.mid);
        context.set_fill_style_str("#ffffff");
        let _ = context.fill_text(&arc.label, 0.0, 0.0);
        context.restore();
    }
    context.set_global_alpha(1.0);
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);

    // Hub
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#ffffff" });
    let _ = context.arc(center.0, center.1, 32.0, 0.0, 2.0 * PI);
    context.fill();
    context.set_stroke_style_str("#333333");
    context.set_line_width(3.0);
    context.stroke();

    // Fixed pointer at 12 o'clock, tip pointing into the wheel
    let (tip_x, tip_y) = polar_point(center, radius - 10.0, to_radians(POINTER_CANVAS_DEG));
    context.begin_path();
    context.move_to(tip_x, tip_y);
    context.line_to(tip_x - 15.0, tip_y - 24.0);
    context.line_to(tip_x + 15.0, tip_y - 24.0);
    context.close_path();
    context.set_fill_style_str("#f39c12");
    context.set_shadow_color("rgba(0, 0, 0, 0.3)");
    context.set_shadow_blur(4.0);
    context.fill();
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.roster.clone(), props.rotation, props.is_spinning, props.highlight),
            move |(roster, rotation, is_spinning, highlight)| {
                let context = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
                        .map(|ctx| (ctx, f64::from(canvas.width())))
                });
                match context {
                    Some((context, size)) => {
                        let props = WheelCanvasProps {
                            roster: roster.clone(),
                            rotation: *rotation,
                            is_spinning: *is_spinning,
                            highlight: *highlight,
                        };
                        draw_wheel(&context, size, &props);
                    }
                    None => log::error!("Wheel canvas has no 2d context"),
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[460px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
