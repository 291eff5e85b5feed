use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CelebrationProps {
    pub name: Option<String>,
    pub color: AttrValue,
    pub confetti: bool,
}

const CONFETTI: [&str; 8] = ["🎉", "✨", "🎊", "⭐", "🎉", "✨", "🎊", "⭐"];

/// Bouncing winner banner with an optional confetti row. Purely visual.
#[function_component(Celebration)]
pub fn celebration(props: &CelebrationProps) -> Html {
    let Some(name) = &props.name else {
        return html! {};
    };

    html! {
        <div class="fixed inset-0 z-40 flex flex-col items-center justify-center pointer-events-none">
            {if props.confetti {
                html! {
                    <div class="flex gap-4 text-4xl mb-6">
                        {CONFETTI.iter().enumerate().map(|(i, piece)| html! {
                            <span key={i} class="animate-bounce" style={format!("animation-delay: {}ms", i * 90)}>{*piece}</span>
                        }).collect::<Html>()}
                    </div>
                }
            } else {
                html! {}
            }}
            <div
                class="animate-bounce px-10 py-6 rounded-full text-white text-3xl font-extrabold shadow-2xl border-4 border-white"
                style={format!("background: {};", props.color)}
            >
                {format!("🎉 {}", name)}
            </div>
        </div>
    }
}
