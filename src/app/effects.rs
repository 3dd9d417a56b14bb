use leptos::{ev, html, prelude::*};
use leptos_use::{
    core::IntoElementsMaybeSignal, js, use_event_listener_with_options,
    use_intersection_observer_with_options, use_supported, use_window, UseEventListenerOptions,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::error::SiteError;
use crate::motion::{
    reveal::{reveal_style, BLOCK_THRESHOLD, TEXT_THRESHOLD},
    stagger::unit_style,
    Direction, RevealPhase, RevealTracker, ScrollSampler, SplitMode, StaggeredText,
};

/// Publishes the window's vertical scroll offset at most once per frame.
///
/// The listener is passive and goes away with the owning component, along
/// with any frame still pending.
pub fn use_scroll_sampler() -> Signal<f64> {
    let (offset_y, set_offset_y) = signal(0.0_f64);
    let sampler = StoredValue::new(ScrollSampler::new());
    let frame = StoredValue::new_local(None::<AnimationFrameRequestHandle>);

    let sample = move || {
        if !sampler.try_update_value(|s| s.request_frame()).unwrap_or(false) {
            return;
        }
        let scheduled = request_animation_frame_with_handle(move || {
            frame.set_value(None);
            let live = window().scroll_y().unwrap_or_default();
            if let Some(y) = sampler.try_update_value(|s| s.publish(live)) {
                set_offset_y.set(y);
            }
        });
        match scheduled {
            Ok(handle) => frame.set_value(Some(handle)),
            Err(err) => {
                sampler.update_value(|s| {
                    s.cancel();
                });
                log::warn!("{}", SiteError::AnimationFrame(format!("{err:?}")));
            }
        }
    };

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| sample(),
        UseEventListenerOptions::default().passive(true),
    );

    // first reading once mounted in the browser
    Effect::new(move |_| sample());

    on_cleanup(move || {
        let pending = sampler.try_update_value(|s| s.cancel()).unwrap_or(false);
        if pending {
            if let Some(handle) = frame.try_update_value(Option::take).flatten() {
                handle.cancel();
            }
        }
    });

    offset_y.into()
}

/// Flips to `true` the first time `target` is at least `threshold` visible.
///
/// Without IntersectionObserver support the content is shown immediately and
/// no observer is created.
pub fn use_reveal<El, M: 'static>(target: El, threshold: f64) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M> + 'static,
{
    let tracker = RwSignal::new(RevealTracker::new(threshold));
    let threshold = tracker.get_untracked().threshold();
    let supported = use_supported(|| js!("IntersectionObserver" in &window()));

    let UseIntersectionObserverReturn { resume, .. } = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let ratio = entries
                .iter()
                .filter(|entry| entry.is_intersecting())
                .map(|entry| entry.intersection_ratio())
                .fold(0.0, f64::max);
            let mut revealed = false;
            tracker.update(|t| revealed = t.sample(ratio));
            if revealed {
                observer.disconnect();
                log::debug!("revealed element at ratio {ratio:.2}");
            }
        },
        UseIntersectionObserverOptions::default()
            .immediate(false)
            .thresholds(vec![threshold]),
    );

    // effects only run in the browser, so SSR output stays hidden
    Effect::new(move |_| {
        let observer_supported = supported.get();
        let phase = tracker
            .try_update(|t| t.start(observer_supported))
            .unwrap_or(RevealPhase::NotObserving);
        match phase {
            RevealPhase::Observing => resume(),
            RevealPhase::Revealed if !observer_supported => {
                log::debug!("IntersectionObserver unavailable, showing content")
            }
            _ => {}
        }
    });

    on_cleanup(move || {
        let _ = tracker.try_update_untracked(|t| t.release());
    });

    Memo::new(move |_| tracker.with(|t| t.has_entered_view())).into()
}

/// Fades and slides its children into place when scrolled into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(into, optional)] class: String,
    #[prop(default = 24.0)] offset: f64,
    #[prop(optional)] delay: u32,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref, BLOCK_THRESHOLD);

    view! {
        <div
            node_ref=node_ref
            class=format!("transition-all duration-700 ease-out {class}")
            style=move || reveal_style(revealed.get(), offset, delay)
        >
            {children()}
        </div>
    }
}

/// Text that un-blurs one word or letter at a time once visible.
#[component]
pub fn BlurText(
    #[prop(into)] text: String,
    #[prop(default = 50)] delay: u32,
    #[prop(optional)] animate_by: SplitMode,
    #[prop(optional)] direction: Direction,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] style: String,
) -> impl IntoView {
    let node_ref = NodeRef::<html::P>::new();
    let revealed = use_reveal(node_ref, TEXT_THRESHOLD);

    let text = StaggeredText::new(&text, animate_by, delay);
    let total = text.len();
    let units = text
        .schedule()
        .map(|(unit, delay_ms)| {
            let content = unit.display_text(text.mode(), total);
            view! { <span style=move || unit_style(revealed.get(), direction, delay_ms)>{content}</span> }
        })
        .collect_view();

    view! {
        <p node_ref=node_ref class=format!("inline-flex flex-wrap {class}") style=style>
            {units}
        </p>
    }
}

/// Soft pill that drops in, then drifts up and down forever.
///
/// The motion itself lives in the `shape-enter` / `shape-float` keyframes.
#[component]
pub fn FloatingShape(
    #[prop(into)] transform: Signal<String>,
    #[prop(into, optional)] class: String,
    #[prop(optional)] delay: f64,
    #[prop(default = 400)] width: u32,
    #[prop(default = 120)] height: u32,
    #[prop(optional)] rotate: i32,
    #[prop(into, default = "from-white/[0.08]".to_string())] gradient: String,
) -> impl IntoView {
    let size = format!(
        "width: {width}px; height: {height}px; --shape-rotate: {rotate}deg; animation-delay: {delay}s;"
    );
    view! {
        <div class=format!("absolute {class}") style:transform=move || transform.get()>
            <div class="relative shape-enter" style=size>
                <div class="relative h-full w-full shape-float">
                    <div class=format!(
                        "absolute inset-0 rounded-full bg-gradient-to-r to-transparent {gradient} backdrop-blur-[2px] border border-white/[0.12] shadow-[0_12px_40px_0_rgba(255,255,255,0.12)] after:absolute after:inset-0 after:rounded-full after:bg-[radial-gradient(circle_at_50%_50%,rgba(255,255,255,0.18),transparent_70%)]",
                    ) />
                </div>
            </div>
        </div>
    }
}
