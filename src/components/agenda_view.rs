use yew::prelude::*;

use crate::agenda::{AgendaBlock, AgendaLayout};
use crate::config::AgendaConfig;
use crate::types::UiSession;

#[derive(Properties, PartialEq)]
pub struct AgendaViewProps {
    pub sessions: Vec<UiSession>,
    #[prop_or_default]
    pub config: AgendaConfig,
    #[prop_or_default]
    pub on_select: Callback<UiSession>,
}

/// Timeline of one day: a column per room with hour rules behind it.
#[function_component(AgendaView)]
pub fn agenda_view(props: &AgendaViewProps) -> Html {
    let layout = use_memo(
        (props.sessions.clone(), props.config.pixels_per_hour),
        |(sessions, pixels_per_hour)| AgendaLayout::compute(sessions, *pixels_per_hour),
    );

    if layout.is_empty() {
        return html! {
            <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#888; font-size:1.2em;">
                { "Nothing to show on the timeline" }
            </div>
        };
    }

    let time_width = props.config.time_column_width;

    html! {
        <div class="agenda-view" style={format!(
            "position:relative; height:{}px; padding-left:{}px; padding-bottom:1em; font-family:Arial,sans-serif;",
            layout.height_px, time_width
        )}>
            { for layout.hour_lines.iter().map(|line| html! {
                <div style={format!(
                    "position:absolute; left:0; right:0; top:{}px; border-top:1px solid #999; pointer-events:none;",
                    line.y_px
                )}>
                    <span style={format!(
                        "position:absolute; left:0; width:{}px; transform:translateY(-50%); text-align:center; font-size:14px; background:#fff; color:#333;",
                        time_width
                    )}>
                        { &line.label }
                    </span>
                </div>
            }) }
            <div style="display:flex; flex-direction:row; height:100%;">
                { for layout.tracks.iter().map(|track| html! {
                    <div key={track.room_id.clone()} class="agenda-track" title={track.room.clone()} style="position:relative; flex:1;">
                        { for track.blocks.iter().map(|block| render_block(block, &props.on_select)) }
                    </div>
                }) }
            </div>
        </div>
    }
}

fn render_block(block: &AgendaBlock, on_select: &Callback<UiSession>) -> Html {
    let onclick = {
        let session = block.session.clone();
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(session.clone()))
    };

    html! {
        <div
            key={block.session.id.clone()}
            class="agenda-block"
            {onclick}
            style={format!(
                "position:absolute; left:2px; right:2px; top:{}px; height:{}px; background:{}; color:white; font-weight:bold; \
                 border-radius:6px; padding:0.4em; box-sizing:border-box; overflow:hidden; cursor:pointer; transition:all 0.2s ease;",
                block.top_px,
                block.height_px,
                block.style.background()
            )}
        >
            { &block.session.title }
        </div>
    }
}
