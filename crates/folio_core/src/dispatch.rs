//! Single-threaded event dispatcher and page controller.
//!
//! # Responsibility
//! - Map each event kind to an ordered list of handlers.
//! - Own the page state and feed it to handlers explicitly.
//! - Throttle scroll events on host timestamps.
//!
//! # Invariants
//! - Every event runs to completion before the next one is accepted.
//! - Handlers for one event run in registration order.
//! - A throttled scroll snapshot is never lost: the latest one is applied
//!   by `tick` once the interval has elapsed.

use crate::config::PageConfig;
use crate::handler::anchor::{self, AnchorAction, ScrollRequest};
use crate::handler::contact::{self, ContactSubmission};
use crate::handler::scroll::{self, ScrollSnapshot};
use crate::handler::{load, nav, resize};
use crate::model::page::{Layout, LinkActivation, Page};
use crate::model::project::Catalog;
use log::{debug, trace};
use std::collections::BTreeMap;

/// Event delivered by the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Load { year: i32 },
    MenuToggleClick,
    LinkClick(LinkActivation),
    Submit(ContactSubmission),
    Scroll(ScrollSnapshot),
    Resize { width: f64 },
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Load { .. } => EventKind::Load,
            Self::MenuToggleClick => EventKind::MenuToggleClick,
            Self::LinkClick(_) => EventKind::LinkClick,
            Self::Submit(_) => EventKind::Submit,
            Self::Scroll(_) => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Load,
    MenuToggleClick,
    LinkClick,
    Submit,
    Scroll,
    Resize,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::MenuToggleClick => "menu_toggle_click",
            Self::LinkClick => "link_click",
            Self::Submit => "submit",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

/// What the host must do after an event was dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventOutcome {
    /// At least one handler ran.
    pub handled: bool,
    /// Host must suppress its default action (navigation, form post).
    pub default_prevented: bool,
    /// Smooth scroll the host should start; no completion is awaited.
    pub scroll_to: Option<ScrollRequest>,
    /// Scroll snapshot was held back by the throttle.
    pub deferred: bool,
}

impl EventOutcome {
    fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            handled: self.handled || other.handled,
            default_prevented: self.default_prevented || other.default_prevented,
            scroll_to: other.scroll_to.or(self.scroll_to),
            deferred: self.deferred || other.deferred,
        }
    }
}

/// Mutable view handed to every handler.
pub struct HandlerContext<'a> {
    pub page: &'a mut Page,
    pub config: &'a PageConfig,
    pub catalog: &'a Catalog,
}

pub type Handler = fn(&mut HandlerContext<'_>, &PageEvent) -> EventOutcome;

/// Table of event kind -> ordered handlers.
#[derive(Default)]
pub struct Dispatcher {
    routes: BTreeMap<EventKind, Vec<Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wiring used by the site: one route per page behavior.
    pub fn standard() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(EventKind::Load, handle_load);
        dispatcher.register(EventKind::MenuToggleClick, handle_menu_toggle);
        dispatcher.register(EventKind::LinkClick, handle_nav_auto_close);
        dispatcher.register(EventKind::LinkClick, handle_anchor_scroll);
        dispatcher.register(EventKind::Submit, handle_submit);
        dispatcher.register(EventKind::Scroll, handle_scroll);
        dispatcher.register(EventKind::Resize, handle_resize);
        dispatcher
    }

    /// Appends `handler` to the route of `kind`.
    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        self.routes.entry(kind).or_default().push(handler);
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.routes.get(&kind).map(Vec::len).unwrap_or(0)
    }

    /// Runs every handler registered for the event's kind.
    ///
    /// Unrouted events return an unhandled, empty outcome.
    pub fn dispatch(&self, ctx: &mut HandlerContext<'_>, event: &PageEvent) -> EventOutcome {
        let kind = event.kind();
        let Some(handlers) = self.routes.get(&kind) else {
            return EventOutcome::default();
        };
        trace!(
            "event=dispatch module=dispatch kind={} handlers={}",
            kind.as_str(),
            handlers.len()
        );
        handlers
            .iter()
            .fold(EventOutcome::default(), |acc, handler| {
                acc.merge(handler(ctx, event))
            })
    }
}

fn handle_load(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> EventOutcome {
    let PageEvent::Load { year } = event else {
        return EventOutcome::default();
    };
    load::on_load(ctx.page, ctx.catalog.projects(), *year);
    EventOutcome::handled()
}

fn handle_menu_toggle(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> EventOutcome {
    nav::toggle(ctx.page);
    EventOutcome::handled()
}

fn handle_nav_auto_close(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> EventOutcome {
    let PageEvent::LinkClick(click) = event else {
        return EventOutcome::default();
    };
    nav::on_nav_link_click(ctx.page, click.origin);
    EventOutcome::handled()
}

fn handle_anchor_scroll(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> EventOutcome {
    let PageEvent::LinkClick(click) = event else {
        return EventOutcome::default();
    };
    ctx.page.layout = click.layout.clone();
    let action = anchor::on_link_click(&click.layout, ctx.config, click.href.as_str());
    EventOutcome {
        handled: true,
        default_prevented: action.prevents_default(),
        scroll_to: match action {
            AnchorAction::ScrollTo(request) => Some(request),
            AnchorAction::NotFragment | AnchorAction::NoTarget => None,
        },
        deferred: false,
    }
}

fn handle_submit(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> EventOutcome {
    let PageEvent::Submit(submission) = event else {
        return EventOutcome::default();
    };
    // Rejection is shown inline on the page; it never fails the dispatch.
    if let Err(err) = contact::submit(ctx.page, submission) {
        debug!("event=dispatch module=dispatch kind=submit status=rejected reason=\"{err}\"");
    }
    EventOutcome {
        handled: true,
        default_prevented: true,
        ..EventOutcome::default()
    }
}

fn handle_scroll(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> EventOutcome {
    let PageEvent::Scroll(snapshot) = event else {
        return EventOutcome::default();
    };
    scroll::on_scroll(ctx.page, ctx.config, snapshot);
    EventOutcome::handled()
}

fn handle_resize(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> EventOutcome {
    let PageEvent::Resize { width } = event else {
        return EventOutcome::default();
    };
    resize::on_resize(ctx.page, ctx.config, *width);
    EventOutcome::handled()
}

/// Leading-edge scroll throttle with a trailing flush.
#[derive(Debug, Clone, Default)]
pub struct ScrollThrottle {
    interval_ms: u64,
    last_applied_ms: Option<u64>,
    pending: Option<ScrollSnapshot>,
}

impl ScrollThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_applied_ms: None,
            pending: None,
        }
    }

    /// Returns the snapshot when it may be applied now, or holds it back.
    pub fn offer(&mut self, snapshot: ScrollSnapshot) -> Option<ScrollSnapshot> {
        if self.is_open(snapshot.at_ms) {
            self.last_applied_ms = Some(snapshot.at_ms);
            self.pending = None;
            return Some(snapshot);
        }
        self.pending = Some(snapshot);
        None
    }

    /// Releases the held-back snapshot once the interval elapsed at `now_ms`.
    pub fn flush(&mut self, now_ms: u64) -> Option<ScrollSnapshot> {
        if self.pending.is_none() || !self.is_open(now_ms) {
            return None;
        }
        self.last_applied_ms = Some(now_ms);
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Layout of the held-back snapshot, if any.
    pub fn pending_layout(&self) -> Option<&Layout> {
        self.pending.as_ref().map(|snapshot| &snapshot.layout)
    }

    fn is_open(&self, now_ms: u64) -> bool {
        match self.last_applied_ms {
            None => true,
            Some(_) if self.interval_ms == 0 => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }
}

/// Top-level owner of page state; the only entry point hosts need.
pub struct PageController {
    page: Page,
    config: PageConfig,
    catalog: Catalog,
    dispatcher: Dispatcher,
    throttle: ScrollThrottle,
}

impl PageController {
    pub fn new(config: PageConfig, catalog: Catalog) -> Self {
        Self::with_dispatcher(config, catalog, Dispatcher::standard())
    }

    pub fn with_dispatcher(config: PageConfig, catalog: Catalog, dispatcher: Dispatcher) -> Self {
        Self {
            page: Page::new(&config),
            throttle: ScrollThrottle::new(config.scroll_throttle_ms),
            config,
            catalog,
            dispatcher,
        }
    }

    /// Dispatches one host event to completion.
    pub fn handle(&mut self, event: PageEvent) -> EventOutcome {
        let event = match event {
            PageEvent::Scroll(snapshot) => match self.throttle.offer(snapshot) {
                Some(snapshot) => PageEvent::Scroll(snapshot),
                None => {
                    // Keep the newest measurement for handlers that resolve targets.
                    if let Some(layout) = self.throttle.pending_layout() {
                        self.page.layout = layout.clone();
                    }
                    return EventOutcome {
                        handled: true,
                        deferred: true,
                        ..EventOutcome::default()
                    };
                }
            },
            other => other,
        };
        self.run(&event)
    }

    /// Applies a throttled scroll snapshot when its interval has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> EventOutcome {
        match self.throttle.flush(now_ms) {
            Some(snapshot) => self.run(&PageEvent::Scroll(snapshot)),
            None => EventOutcome::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.throttle.has_pending()
    }

    fn run(&mut self, event: &PageEvent) -> EventOutcome {
        let mut ctx = HandlerContext {
            page: &mut self.page,
            config: &self.config,
            catalog: &self.catalog,
        };
        self.dispatcher.dispatch(&mut ctx, event)
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(PageConfig::default(), Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Dispatcher, EventKind, PageController, PageEvent, ScrollThrottle};
    use crate::handler::contact::{ContactSubmission, MISSING_FIELDS_MESSAGE};
    use crate::handler::scroll::ScrollSnapshot;
    use crate::model::page::{Layout, Tone};

    fn snapshot(scroll_y: f64, at_ms: u64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            layout: Layout::default(),
            at_ms,
        }
    }

    #[test]
    fn standard_table_routes_every_kind() {
        let dispatcher = Dispatcher::standard();
        for kind in [
            EventKind::Load,
            EventKind::MenuToggleClick,
            EventKind::Submit,
            EventKind::Scroll,
            EventKind::Resize,
        ] {
            assert_eq!(dispatcher.handler_count(kind), 1, "{}", kind.as_str());
        }
        assert_eq!(dispatcher.handler_count(EventKind::LinkClick), 2);
    }

    #[test]
    fn throttle_admits_first_and_defers_burst() {
        let mut throttle = ScrollThrottle::new(16);
        assert!(throttle.offer(snapshot(1.0, 0)).is_some());
        assert!(throttle.offer(snapshot(2.0, 5)).is_none());
        assert!(throttle.offer(snapshot(3.0, 10)).is_none());
        assert!(throttle.has_pending());

        assert!(throttle.flush(12).is_none());
        let flushed = throttle.flush(16).expect("pending snapshot released");
        assert_eq!(flushed.scroll_y, 3.0);
        assert!(!throttle.has_pending());
    }

    #[test]
    fn late_event_supersedes_pending() {
        let mut throttle = ScrollThrottle::new(16);
        throttle.offer(snapshot(1.0, 0));
        throttle.offer(snapshot(2.0, 4));
        let admitted = throttle.offer(snapshot(9.0, 20)).expect("interval elapsed");
        assert_eq!(admitted.scroll_y, 9.0);
        assert!(throttle.flush(100).is_none());
    }

    #[test]
    fn zero_interval_disables_throttle() {
        let mut throttle = ScrollThrottle::new(0);
        assert!(throttle.offer(snapshot(1.0, 0)).is_some());
        assert!(throttle.offer(snapshot(2.0, 0)).is_some());
    }

    #[test]
    fn held_back_snapshot_exposes_its_layout() {
        let mut throttle = ScrollThrottle::new(16);
        throttle.offer(snapshot(1.0, 0));
        assert!(throttle.pending_layout().is_none());

        let mut measured = snapshot(2.0, 5);
        measured.layout.scroll_height = 2400.0;
        throttle.offer(measured);
        let layout = throttle.pending_layout().expect("pending layout");
        assert_eq!(layout.scroll_height, 2400.0);
    }

    #[test]
    fn rejected_submit_is_handled_and_shown_inline() {
        let mut controller = PageController::default();
        let submission = ContactSubmission::new("", "a@b.c", "hi");
        let outcome = controller.handle(PageEvent::Submit(submission));

        assert!(outcome.handled);
        assert!(outcome.default_prevented);
        let message = controller
            .page()
            .form_message
            .clone()
            .expect("rejection shown");
        assert_eq!(message.tone, Tone::Error);
        assert_eq!(message.text, MISSING_FIELDS_MESSAGE);
    }
}
