use crate::{
    chapter::{
        Chapter, ChapterRegistry, FOOTER_LINES, HERO_CALLOUT, HERO_DESCRIPTION, HERO_PROMPT,
        HERO_SUBTITLE, HERO_TITLE, Rgb,
    },
    config::AppConfig,
    constants::{
        CARD_GAP, CARD_HEIGHT, CARD_WIDTH, FOOTER_HEIGHT, FRAME_INTERVAL, IDLE_POLL_INTERVAL,
        MIN_HERO_HEIGHT, PAGE_SCROLL_EASING, PAGE_SCROLL_ROWS,
    },
    error::UiError,
    navigation::{NavigationController, RegionBounds, Transition, WheelIntent, WheelOutcome},
    scroll_region::{ContentRegion, ScrollRegion},
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::{Buffer, Cell},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, LineGauge, Padding, Paragraph, Widget},
};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

const INK: Rgb = Rgb(0x10, 0x2a, 0x24);
const CARD_BG: Rgb = Rgb(0xfb, 0xfa, 0xf3);
const HERO_BG: Rgb = Rgb(0x0e, 0x3b, 0x32);
const HERO_ACCENT: Rgb = Rgb(0xf2, 0x9a, 0xb8);
const FOOTER_BG: Rgb = Rgb(0x0a, 0x24, 0x1f);
const NEXT_LABEL: &str = " Next Chapter → ";

/// Raw mode, alternate screen and mouse capture for as long as it lives.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self, UiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Vertical page scroll with an optional smooth-scroll target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageScroll {
    offset: f64,
    target: Option<f64>,
    max: f64,
}

impl PageScroll {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            target: None,
            max: 0.0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn rows(&self) -> u16 {
        self.offset.round().clamp(0.0, u16::MAX as f64) as u16
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max);
        self.target = self.target.map(|t| t.clamp(0.0, self.max));
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.target = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    pub fn scroll_into_view(&mut self, target: f64) {
        self.target = Some(target.clamp(0.0, self.max));
    }

    /// Advances one frame toward the target. Returns true while moving.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        self.offset += (target - self.offset) * PAGE_SCROLL_EASING;
        if (target - self.offset).abs() < 0.5 {
            self.offset = target;
            self.target = None;
        }
        self.target.is_some()
    }
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new()
    }
}

/// Page geometry in page coordinates: hero, chapter stack, footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: u16,
    pub hero_height: u16,
    pub footer_height: u16,
}

impl PageLayout {
    pub fn new(width: u16, viewport_height: u16) -> Self {
        Self {
            width,
            viewport_height,
            hero_height: viewport_height.max(MIN_HERO_HEIGHT),
            footer_height: FOOTER_HEIGHT,
        }
    }

    pub fn page_height(&self) -> u16 {
        self.hero_height
            .saturating_add(self.viewport_height)
            .saturating_add(self.footer_height)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height().saturating_sub(self.viewport_height)
    }

    pub fn hero_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.hero_height)
    }

    pub fn stack_area(&self) -> Rect {
        Rect::new(0, self.hero_height, self.width, self.viewport_height)
    }

    pub fn footer_area(&self) -> Rect {
        Rect::new(
            0,
            self.hero_height.saturating_add(self.viewport_height),
            self.width,
            self.footer_height,
        )
    }

    /// Stack bounds relative to the top of the viewport.
    pub fn stack_bounds(&self, scroll: f64) -> RegionBounds {
        let top = self.hero_height as f64 - scroll;
        RegionBounds::new(top, top + self.viewport_height as f64)
    }
}

/// Rows of a chapter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub frame: Rect,
    pub tab_bar: Rect,
    pub title: Rect,
    pub label: Rect,
    pub heading: Rect,
    pub description: Rect,
    pub cards: Rect,
    pub status: Rect,
}

impl PanelLayout {
    pub fn new(area: Rect) -> Self {
        let inner = Self::frame_block().inner(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Length(1),
                Constraint::Length(1), // Title tab
                Constraint::Length(1), // Chapter label
                Constraint::Length(1), // Heading
                Constraint::Length(3), // Description
                Constraint::Length(1),
                Constraint::Min(0),    // Cards
                Constraint::Length(1), // Status + next button
            ])
            .split(inner);

        Self {
            frame: area,
            tab_bar: rows[0],
            title: rows[2],
            label: rows[3],
            heading: rows[4],
            description: rows[5],
            cards: rows[7],
            status: rows[8],
        }
    }

    fn frame_block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
    }

    pub fn tab_rect(&self, index: usize, count: usize) -> Rect {
        if index == 0 || index > count {
            return Rect::default();
        }
        let bar = self.tab_bar;
        let count = count.min(u16::MAX as usize) as u16;
        let index = index as u16;
        // Too narrow for every tab: one cell each, left to right, until the bar runs out.
        if bar.width < count {
            if index > bar.width {
                return Rect::default();
            }
            return Rect::new(bar.x + index - 1, bar.y, 1, bar.height);
        }
        let width = bar.width / count;
        let x = bar.x + width * (index - 1);
        let w = if index == count {
            bar.width - width * (count - 1)
        } else {
            width
        };
        Rect::new(x, bar.y, w, bar.height)
    }

    pub fn next_button(&self) -> Rect {
        let width = (Span::raw(NEXT_LABEL).width() as u16).min(self.status.width);
        Rect::new(
            self.status.right().saturating_sub(width),
            self.status.y,
            width,
            self.status.height,
        )
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// Copies `area.width x area.height` cells from `src` (starting at
/// `origin`) into `area` of `dst`. Transparent copies skip blank cells.
fn blit(src: &Buffer, origin: (u16, u16), dst: &mut Buffer, area: Rect, transparent: bool) {
    let blank = Cell::default();
    for dy in 0..area.height {
        let sy = origin.1.saturating_add(dy);
        let ty = area.y.saturating_add(dy);
        if sy >= src.area.bottom() || ty >= dst.area.bottom() {
            break;
        }
        for dx in 0..area.width {
            let sx = origin.0.saturating_add(dx);
            let tx = area.x.saturating_add(dx);
            if sx >= src.area.right() || tx >= dst.area.right() {
                break;
            }
            if !contains(src.area, sx, sy) || !contains(dst.area, tx, ty) {
                continue;
            }
            let cell = &src.content[src.index_of(sx, sy)];
            if transparent && *cell == blank {
                continue;
            }
            let index = dst.index_of(tx, ty);
            dst.content[index] = cell.clone();
        }
    }
}

/// Scratch buffer for one page section, capped to what a single `Buffer`
/// can address.
fn section_buffer(width: u16, height: u16) -> Buffer {
    let rows = height.min(u16::MAX / width.max(1));
    Buffer::empty(Rect::new(0, 0, width, rows))
}

/// Renders `section` (page coordinates) into a scratch buffer and copies the
/// rows visible at page scroll `scroll` into the viewport `area` of `dst`.
fn draw_section(
    dst: &mut Buffer,
    area: Rect,
    section: Rect,
    scroll: u16,
    render: impl FnOnce(&mut Buffer, Rect),
) {
    let top = section.y.max(scroll);
    let bottom = section.bottom().min(scroll.saturating_add(area.height));
    if top >= bottom || section.width == 0 {
        return;
    }

    let mut scratch = section_buffer(section.width, section.height);
    let scratch_area = scratch.area;
    render(&mut scratch, scratch_area);

    let target = Rect::new(
        area.x,
        area.y.saturating_add(top - scroll),
        area.width.min(section.width),
        bottom - top,
    );
    blit(&scratch, (0, top - section.y), dst, target, false);
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Vertical offset of chapter `id` inside a stack of `height` rows: 0 when
/// revealed, `height` when parked below.
pub fn chapter_offset(
    id: usize,
    active: usize,
    transition: Option<&Transition>,
    height: u16,
    now: Instant,
) -> u16 {
    let full = height as f64;
    if let Some(t) = transition {
        let eased = ease_out(t.progress(now));
        if t.is_forward() && id == t.to {
            return ((1.0 - eased) * full).round() as u16;
        }
        if !t.is_forward() && id == t.from {
            return (eased * full).round() as u16;
        }
    }
    if id <= active { 0 } else { height }
}

pub fn truncate_label(label: &str, max_width: usize) -> String {
    let graphemes: Vec<&str> = label.graphemes(true).collect();
    if graphemes.len() <= max_width {
        return label.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut truncated = graphemes[..max_width - 1].concat();
    truncated.push('…');
    truncated
}

pub struct App {
    registry: ChapterRegistry,
    controller: NavigationController,
    page: PageScroll,
    layout: Option<PageLayout>,
    wheel_step: u16,
    should_quit: bool,
}

impl App {
    pub fn new(registry: ChapterRegistry, config: AppConfig) -> Self {
        let controller = NavigationController::new(registry.len(), config.navigation);
        Self {
            registry,
            controller,
            page: PageScroll::new(),
            layout: None,
            wheel_step: config.wheel_step,
            should_quit: false,
        }
    }

    /// Validates `config` and builds an app over the built-in chapters.
    pub fn with_builtin_story(config: AppConfig) -> Result<Self, UiError> {
        config.validate()?;
        let registry = ChapterRegistry::builtin()?;
        Ok(Self::new(registry, config))
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn registry(&self) -> &ChapterRegistry {
        &self.registry
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.layout.as_ref()
    }

    pub fn page_offset(&self) -> f64 {
        self.page.offset()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<(), UiError> {
        let mut session = TerminalSession::enter()?;
        info!("Story viewer started with {} chapters", self.registry.len());

        let result = self.event_loop(&mut session);

        self.controller.teardown();
        drop(session);
        info!("Story viewer stopped on chapter {}", self.controller.active_index());
        result
    }

    fn event_loop(&mut self, session: &mut TerminalSession) -> Result<(), UiError> {
        loop {
            let now = Instant::now();
            self.step_animations(now);

            session.terminal.draw(|f| self.draw(f, now))?;

            if event::poll(self.poll_timeout(Instant::now()))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code)
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
                    Event::Resize(width, height) => self.resize(width, height),
                    _ => {}
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Fires due timers and advances the page scroll by one frame. Returns
    /// true while anything is still moving.
    pub fn step_animations(&mut self, now: Instant) -> bool {
        self.controller.tick(now);
        let scrolling = self.page.step();
        scrolling || self.controller.transition().is_some()
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.page.is_animating() || self.controller.transition().is_some() {
            return FRAME_INTERVAL;
        }
        match self.controller.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL_INTERVAL),
            None => IDLE_POLL_INTERVAL,
        }
    }

    /// Recomputes the page layout and mounts or resizes every chapter's
    /// horizontal region.
    pub fn resize(&mut self, width: u16, height: u16) {
        let layout = PageLayout::new(width, height);
        if self.layout == Some(layout) {
            return;
        }
        self.layout = Some(layout);
        self.page.set_max(layout.max_scroll() as f64);

        let viewport_width = PanelLayout::new(layout.stack_area()).cards.width as f64;
        for chapter in self.registry.iter() {
            match self.controller.region_mut(chapter.id) {
                Some(region) => region.resize(viewport_width),
                None => self.controller.mount_region(
                    chapter.id,
                    ContentRegion::new(chapter.content_width() as f64, viewport_width),
                ),
            }
        }
        self.controller.sync_active_progress();
        debug!("Layout {}x{}, card viewport {} cells", width, height, viewport_width);
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let page_rows = self
            .layout
            .map(|l| l.viewport_height.saturating_sub(2).max(1))
            .unwrap_or(PAGE_SCROLL_ROWS) as f64;

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::PageDown => self.page.scroll_by(page_rows),
            KeyCode::PageUp => self.page.scroll_by(-page_rows),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let step = self.wheel_step as f64;
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.handle_wheel(step, mouse.row, now);
            }
            MouseEventKind::ScrollUp => {
                self.handle_wheel(-step, mouse.row, now);
            }
            MouseEventKind::ScrollRight => self.handle_horizontal_wheel(step, mouse.row),
            MouseEventKind::ScrollLeft => self.handle_horizontal_wheel(-step, mouse.row),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, now)
            }
            _ => {}
        }
    }

    pub fn handle_wheel(&mut self, delta: f64, row: u16, now: Instant) -> WheelOutcome {
        let stack = self.layout.map(|l| l.stack_bounds(self.page.offset()));
        let outcome =
            self.controller
                .on_wheel_intent(WheelIntent::new(delta, row as f64), stack, now);

        match outcome {
            WheelOutcome::PassThrough => {
                self.page.scroll_by(delta.signum() * PAGE_SCROLL_ROWS as f64)
            }
            WheelOutcome::Advanced { .. } => self.bring_stack_into_view(),
            WheelOutcome::Suppressed | WheelOutcome::Scrolled { .. } => {}
        }
        outcome
    }

    fn handle_horizontal_wheel(&mut self, delta: f64, row: u16) {
        let Some(layout) = self.layout else {
            return;
        };
        let page_row = row.saturating_add(self.page.rows());
        if contains(layout.stack_area(), 0, page_row) {
            self.controller.scroll_active_region(delta);
        }
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(layout) = self.layout else {
            return;
        };
        let page_row = row.saturating_add(self.page.rows());
        let panel = PanelLayout::new(layout.stack_area());
        let count = self.registry.len();

        if let Some(target) =
            (1..=count).find(|&k| contains(panel.tab_rect(k, count), column, page_row))
        {
            self.controller.on_chapter_tab_click(target);
            return;
        }

        if self.controller.active_index() < count
            && contains(panel.next_button(), column, page_row)
        {
            self.controller.on_next_chapter_click(now);
            self.bring_stack_into_view();
        }
    }

    pub fn bring_stack_into_view(&mut self) {
        if let Some(layout) = self.layout {
            self.page.scroll_into_view(layout.hero_height as f64);
        }
    }

    /// Draws the part of the page under the viewport. Each section is
    /// rendered on its own and only while some of its rows are visible.
    pub fn draw(&mut self, f: &mut Frame, now: Instant) {
        let area = f.area();
        self.resize(area.width, area.height);
        let Some(layout) = self.layout else {
            return;
        };
        let scroll = self.page.rows();
        let buf = f.buffer_mut();

        draw_section(buf, area, layout.hero_area(), scroll, Self::render_hero);
        draw_section(buf, area, layout.stack_area(), scroll, |scratch, rect| {
            self.render_stack(scratch, rect, now)
        });
        draw_section(buf, area, layout.footer_area(), scroll, Self::render_footer);
    }

    fn render_hero(buf: &mut Buffer, area: Rect) {
        buf.set_style(area, Style::default().bg(HERO_BG.to_color()));

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "🌱 GIVING TOGETHER · FUNDRAISING FIELD GUIDE",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for word in HERO_TITLE {
            lines.push(Line::from(Span::styled(
                word,
                Style::default()
                    .fg(HERO_ACCENT.to_color())
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(Span::styled(
            HERO_SUBTITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
        lines.extend(
            HERO_DESCRIPTION
                .iter()
                .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Gray)))),
        );
        lines.push(Line::from(""));
        lines.extend(
            HERO_CALLOUT
                .iter()
                .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::White)))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("↓ {}", HERO_PROMPT),
            Style::default().fg(HERO_ACCENT.to_color()),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_footer(buf: &mut Buffer, area: Rect) {
        buf.set_style(area, Style::default().bg(FOOTER_BG.to_color()));
        let lines: Vec<Line> = FOOTER_LINES
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Gray))))
            .collect();
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::new(2, 2, 1, 0)),
            )
            .render(area, buf);
    }

    fn render_stack(&self, page: &mut Buffer, stack: Rect, now: Instant) {
        if stack.width == 0 || stack.height == 0 {
            return;
        }
        let active = self.controller.active_index();
        let transition = self.controller.transition();

        // Later chapters paint over earlier ones.
        for chapter in self.registry.iter() {
            let offset = chapter_offset(chapter.id, active, transition, stack.height, now);
            if offset >= stack.height {
                continue;
            }

            let panel_area = Rect::new(0, 0, stack.width, stack.height);
            let mut scratch = Buffer::empty(panel_area);
            self.render_panel(chapter, &mut scratch, panel_area);

            let target = Rect::new(
                stack.x,
                stack.y + offset,
                stack.width,
                stack.height - offset,
            );
            blit(&scratch, (0, 0), page, target, false);
        }
    }

    fn render_panel(&self, chapter: &Chapter, buf: &mut Buffer, area: Rect) {
        let theme = chapter.theme;
        let ink = Style::default().fg(INK.to_color());

        for row in 0..area.height {
            let t = row as f64 / area.height.max(2).saturating_sub(1) as f64;
            buf.set_style(
                Rect::new(area.x, area.y + row, area.width, 1),
                Style::default().bg(theme.sample(t).to_color()),
            );
        }
        PanelLayout::frame_block()
            .border_style(Style::default().fg(theme.tab[1].to_color()))
            .render(area, buf);

        let panel = PanelLayout::new(area);
        self.render_tab_bar(buf, &panel);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", chapter.title),
                Style::default()
                    .fg(Color::White)
                    .bg(theme.tab[0].to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", chapter.subtitle),
                ink.add_modifier(Modifier::ITALIC),
            ),
        ]))
        .render(panel.title, buf);

        Paragraph::new(Span::styled(chapter.label, ink.add_modifier(Modifier::DIM)))
            .render(panel.label, buf);
        Paragraph::new(Span::styled(chapter.heading, ink.add_modifier(Modifier::BOLD)))
            .render(panel.heading, buf);
        Paragraph::new(
            chapter
                .description
                .iter()
                .map(|l| Line::from(*l))
                .collect::<Vec<_>>(),
        )
        .style(ink)
        .render(panel.description, buf);

        self.render_cards(chapter, buf, panel.cards);
        self.render_status(chapter, buf, &panel);
    }

    fn render_tab_bar(&self, buf: &mut Buffer, panel: &PanelLayout) {
        let count = self.registry.len();
        let active = self.controller.active_index();

        for chapter in self.registry.iter() {
            let rect = panel.tab_rect(chapter.id, count);
            if rect.width == 0 {
                continue;
            }
            let revealed = chapter.id <= active;
            let mut style = Style::default().fg(Color::White);
            for column in 0..rect.width {
                let t = column as f64 / rect.width.max(2).saturating_sub(1) as f64;
                let color = chapter.theme.tab[0].lerp(chapter.theme.tab[1], t);
                buf.set_style(
                    Rect::new(rect.x + column, rect.y, 1, 1),
                    Style::default().bg(color.to_color()),
                );
            }
            if !revealed {
                style = style.add_modifier(Modifier::DIM);
            }
            if chapter.id == active {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            let text = if revealed {
                truncate_label(chapter.title, rect.width.saturating_sub(2) as usize)
            } else {
                chapter.numeral().to_string()
            };
            Paragraph::new(Span::styled(text, style))
                .alignment(Alignment::Center)
                .render(rect, buf);
        }
    }

    /// Draws the card row into a scratch buffer as wide as the content and
    /// windows it by the horizontal translation.
    fn render_cards(&self, chapter: &Chapter, buf: &mut Buffer, area: Rect) {
        let content_width = chapter.content_width();
        if content_width == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let height = area.height.min(CARD_HEIGHT);
        let mut row = Buffer::empty(Rect::new(0, 0, content_width, height));
        for (i, card) in chapter.cards.iter().enumerate() {
            let x = i as u16 * (CARD_WIDTH + CARD_GAP);
            let rect = Rect::new(x, 0, CARD_WIDTH, height);
            let style = Style::default().fg(INK.to_color()).bg(CARD_BG.to_color());

            Paragraph::new(card.lines.iter().map(|l| Line::from(*l)).collect::<Vec<_>>())
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(chapter.theme.tab[1].to_color()))
                        .title(Span::styled(
                            format!(" {} ", card.badge),
                            Style::default().add_modifier(Modifier::BOLD),
                        ))
                        .padding(Padding::horizontal(1)),
                )
                .render(rect, &mut row);
        }

        let translation = if chapter.id == self.controller.active_index() {
            let extent = self
                .controller
                .region(chapter.id)
                .map(|r| r.extent())
                .unwrap_or(0.0);
            (self.controller.horizontal_progress() * extent).round() as u16
        } else {
            0
        };
        blit(&row, (translation, 0), buf, area, true);
    }

    fn render_status(&self, chapter: &Chapter, buf: &mut Buffer, panel: &PanelLayout) {
        let count = self.registry.len();
        let ink = Style::default().fg(INK.to_color());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Min(0),
                Constraint::Length(panel.next_button().width),
            ])
            .split(panel.status);

        let lock_marker = if self.controller.is_locked() { " ◆" } else { "" };
        Paragraph::new(Span::styled(
            format!("Chapter {}/{}{}", chapter.id, count, lock_marker),
            ink.add_modifier(Modifier::BOLD),
        ))
        .render(columns[0], buf);

        let scrollable = self
            .controller
            .region(chapter.id)
            .is_some_and(|r| r.extent() > 0.0);
        if chapter.id == self.controller.active_index() && scrollable {
            LineGauge::default()
                .ratio(self.controller.horizontal_progress())
                .label("")
                .filled_style(Style::default().fg(INK.to_color()))
                .unfilled_style(Style::default().fg(chapter.theme.tab[1].to_color()))
                .render(columns[1], buf);
        }

        if chapter.id < count {
            Paragraph::new(Span::styled(
                NEXT_LABEL,
                Style::default()
                    .fg(Color::White)
                    .bg(INK.to_color())
                    .add_modifier(Modifier::BOLD),
            ))
            .render(panel.next_button(), buf);
        }
    }
}
