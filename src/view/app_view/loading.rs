//! First-load entry animations and the app-ready barrier.

use rustc_hash::FxHashSet;
use web_time::Duration;

use super::AppView;
use crate::view::collaborators::{
    ContentSlot, EntryAnimation, EntryElement, EntryKind, EntryToken,
};
use crate::view::events::ViewEvent;
use crate::view::ViewAttribute;

/// Tracks outstanding entry animations.
#[derive(Debug, Clone, Default)]
pub(super) struct LoadBarrier {
    fonts_loaded: bool,
    outstanding: FxHashSet<EntryElement>,
}

impl AppView {
    /// Run the one-time entry animations. Call once fonts are available;
    /// later calls are ignored.
    ///
    /// Interaction stays disabled until every entry animation is reported
    /// finished through [`entry_animation_finished`](Self::entry_animation_finished).
    pub fn fonts_loaded(&mut self) {
        if self.load.fonts_loaded {
            log::debug!("fonts already loaded; ignoring");
            return;
        }
        self.load.fonts_loaded = true;

        let entries = self.entry_animations();
        self.load.outstanding = entries.iter().map(|entry| entry.element).collect();
        log::debug!("playing {} entry animations", entries.len());

        self.stage.set_interactive(false);
        for entry in &entries {
            self.stage.play_entry(entry);
        }
        self.layout_now();
    }

    /// Report that the entry animation behind `token` ended.
    ///
    /// Duplicate reports are ignored. A memo entry only settles the memo
    /// opacity if the memo was neither hidden nor replaced since the entry
    /// started. When the last report arrives, interaction is re-enabled and
    /// [`ViewEvent::AppLoad`] is emitted.
    pub fn entry_animation_finished(&mut self, token: EntryToken) {
        if !self.load.outstanding.remove(&token.element) {
            log::debug!(
                "ignoring duplicate entry completion for {}",
                token.element.id()
            );
            return;
        }

        if token.element == EntryElement::MemoTime {
            self.finish_memo_entry(token);
        }

        if self.load.outstanding.is_empty() {
            self.stage.set_interactive(true);
            log::info!("app loaded");
            self.events.emit(ViewEvent::AppLoad);
        }
    }

    /// Whether the view is still loading and should not be driven yet.
    #[must_use]
    pub fn loading(&self) -> bool {
        !self.load.fonts_loaded || !self.load.outstanding.is_empty()
    }

    /// Whether loading finished.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.loading()
    }

    fn finish_memo_entry(&mut self, token: EntryToken) {
        let current = self.lingering.generation(ContentSlot::Memo);
        if token.generation != current || !self.state.memo_visible() {
            log::debug!(
                "memo changed during its entry (generation {} -> {current})",
                token.generation
            );
            return;
        }
        self.animator.set_attribute(ViewAttribute::MemoOpacity, 1.0);
        self.layout_now();
    }

    fn entry_animations(&self) -> Vec<EntryAnimation> {
        let duration = self.options.load.duration();
        let memo_generation = self.lingering.generation(ContentSlot::Memo);
        let token = |element| EntryToken {
            generation: if element == EntryElement::MemoTime {
                memo_generation
            } else {
                0
            },
            element,
        };
        let entry = |element, kind, delay| EntryAnimation {
            element,
            kind,
            duration,
            delay,
            token: token(element),
        };

        let mut entries = vec![
            entry(EntryElement::Header, EntryKind::SinkFade, Duration::ZERO),
            entry(EntryElement::Time, EntryKind::ShrinkFade, Duration::ZERO),
            entry(
                EntryElement::Pentagons,
                EntryKind::ShrinkFade,
                self.options.load.pentagon_delay(),
            ),
        ];
        if self.state.footer_visible() {
            entries.push(entry(
                EntryElement::Footer,
                EntryKind::RiseFade,
                Duration::ZERO,
            ));
        }
        if self.state.memo_visible() {
            entries.push(entry(
                EntryElement::MemoTime,
                EntryKind::FadeIn,
                Duration::ZERO,
            ));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::headless::HeadlessRig;
    use crate::layout::WindowSize;
    use crate::view::{InitialContent, LatestSolve};

    fn finish_all(view: &mut AppView, rig: &HeadlessRig) {
        for entry in rig.stage.record().played {
            view.entry_animation_finished(entry.token);
        }
    }

    #[test]
    fn entry_set_follows_first_state() {
        let rig = HeadlessRig::new(WindowSize::new(1024.0, 900.0));
        let mut view = rig.build_default().unwrap();
        assert!(view.loading());
        view.fonts_loaded();

        let record = rig.stage.record();
        assert!(!record.interactive);
        let names: Vec<_> = record
            .played
            .iter()
            .map(|e| (e.element.id(), e.kind.name()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("header", "sinkfade"),
                ("time", "shrinkfade"),
                ("pentagons", "shrinkfade"),
                ("footer", "risefade"),
            ]
        );
        assert_eq!(record.played[2].delay, Duration::from_millis(150));
        assert!(record
            .played
            .iter()
            .all(|e| e.duration == Duration::from_millis(700)));
    }

    #[test]
    fn app_load_fires_once_after_every_entry() {
        let rig = HeadlessRig::new(WindowSize::new(1024.0, 900.0));
        let mut view = rig.build_default().unwrap();
        let loads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&loads);
        view.events_mut().subscribe(move |event| {
            if *event == ViewEvent::AppLoad {
                counter.set(counter.get() + 1);
            }
        });

        view.fonts_loaded();
        let played = rig.stage.record().played;
        for entry in &played[..played.len() - 1] {
            view.entry_animation_finished(entry.token);
            // Duplicates never count twice.
            view.entry_animation_finished(entry.token);
        }
        assert!(view.loading());
        assert_eq!(loads.get(), 0);

        view.entry_animation_finished(played[played.len() - 1].token);
        assert!(view.is_ready());
        assert_eq!(loads.get(), 1);
        assert!(rig.stage.record().interactive);

        finish_all(&mut view, &rig);
        view.fonts_loaded();
        assert_eq!(loads.get(), 1);
        assert_eq!(rig.stage.record().played.len(), played.len());
    }

    #[test]
    fn memo_entry_snaps_opacity() {
        let rig = HeadlessRig::new(WindowSize::new(1024.0, 900.0));
        let mut view = memo_view(&rig);
        view.fonts_loaded();
        let played = rig.stage.record().played;
        let memo = played
            .iter()
            .find(|e| e.element == EntryElement::MemoTime)
            .unwrap();
        view.animator.set_attribute(ViewAttribute::MemoOpacity, 0.0);
        view.entry_animation_finished(memo.token);
        assert_eq!(view.attributes().value(ViewAttribute::MemoOpacity), 1.0);
    }

    fn memo_view(rig: &HeadlessRig) -> AppView {
        rig.build(
            Default::default(),
            InitialContent {
                latest_solve: Some(LatestSolve {
                    time_ms: 20_000,
                    memo_ms: Some(8_000),
                    ..LatestSolve::default()
                }),
                ..InitialContent::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn memo_hidden_during_entry_stays_hidden() {
        let rig = HeadlessRig::new(WindowSize::new(1024.0, 900.0));
        let mut view = memo_view(&rig);
        view.fonts_loaded();
        view.set_memo(None).unwrap();

        finish_all(&mut view, &rig);
        assert!(view.is_ready());
        let _ = rig.settle(&mut view);

        assert!(!view.state().memo_visible());
        assert_eq!(view.attributes().value(ViewAttribute::MemoOpacity), 0.0);
        assert_eq!(rig.content.record().memo, None);
    }

    #[test]
    fn memo_replaced_during_entry_keeps_its_fade() {
        let rig = HeadlessRig::new(WindowSize::new(1024.0, 900.0));
        let mut view = memo_view(&rig);
        view.fonts_loaded();
        view.set_memo(None).unwrap();
        let _ = rig.advance(&mut view, Duration::from_millis(100));
        view.set_memo(Some("6.50")).unwrap();
        assert_eq!(view.animator.target(ViewAttribute::MemoOpacity), Some(1.0));

        finish_all(&mut view, &rig);
        // The fade back in is still running rather than snapped.
        assert!(view.animator.is_animating_key(ViewAttribute::MemoOpacity));
        let _ = rig.settle(&mut view);
        assert_eq!(view.attributes().value(ViewAttribute::MemoOpacity), 1.0);
        assert_eq!(rig.content.record().memo.as_deref(), Some("6.50"));
    }

    #[test]
    fn hidden_footer_gets_no_entry() {
        let rig = HeadlessRig::new(WindowSize::new(1024.0, 300.0));
        let mut view = rig.build_default().unwrap();
        assert!(!view.state().footer_visible());
        view.fonts_loaded();
        assert_eq!(rig.stage.record().played.len(), 3);
        finish_all(&mut view, &rig);
        assert!(view.is_ready());
    }
}
