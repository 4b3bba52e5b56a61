use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markview_engine::{
    EditorTheme, Highlighter, TextAttributes, parse_document, parsing::blocks::BlockNode,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    io::{Stdout, stdout},
    path::Path,
};

use crate::describe;

struct App<'a> {
    title: String,
    source: Vec<Line<'a>>,
    outline: Vec<(String, usize)>,
    outline_state: ListState,
    scroll: u16,
}

impl<'a> App<'a> {
    fn new(path: &Path, markdown: &'a str, theme: &EditorTheme) -> Self {
        let highlighter = Highlighter::new();
        let source = markdown
            .lines()
            .map(|line| styled_line(line, &highlighter, theme))
            .collect();
        let outline = parse_document(markdown)
            .blocks
            .iter()
            .map(|b| (outline_label(b), b.lines.start))
            .collect::<Vec<_>>();

        let mut outline_state = ListState::default();
        if !outline.is_empty() {
            outline_state.select(Some(0));
        }

        Self {
            title: path.display().to_string(),
            source,
            outline,
            outline_state,
            scroll: 0,
        }
    }

    fn next_block(&mut self) {
        if self.outline.is_empty() {
            return;
        }
        let i = match self.outline_state.selected() {
            Some(i) => (i + 1) % self.outline.len(),
            None => 0,
        };
        self.select_block(i);
    }

    fn previous_block(&mut self) {
        if self.outline.is_empty() {
            return;
        }
        let i = match self.outline_state.selected() {
            Some(0) | None => self.outline.len() - 1,
            Some(i) => i - 1,
        };
        self.select_block(i);
    }

    fn select_block(&mut self, i: usize) {
        self.outline_state.select(Some(i));
        if let Some((_, line)) = self.outline.get(i) {
            self.scroll = u16::try_from(*line).unwrap_or(u16::MAX);
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = u16::try_from(self.source.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let next = i32::from(self.scroll) + delta;
        self.scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX).min(max);
    }
}

fn outline_label(block: &BlockNode<'_>) -> String {
    let preview = block.content.first().copied().unwrap_or_default();
    format!("{:>4} {} {}", block.lines.start + 1, describe(block.kind), preview)
}

/// Maps theme attributes onto a terminal style. Monospace has no terminal
/// equivalent and is ignored.
pub fn to_style(attrs: TextAttributes) -> Style {
    let mut style = Style::default();
    if let Some(fg) = attrs.foreground {
        style = style.fg(Color::Rgb(fg.r, fg.g, fg.b));
    }
    if let Some(bg) = attrs.background {
        style = style.bg(Color::Rgb(bg.r, bg.g, bg.b));
    }
    let mut modifiers = Modifier::empty();
    if attrs.bold {
        modifiers |= Modifier::BOLD;
    }
    if attrs.italic {
        modifiers |= Modifier::ITALIC;
    }
    if attrs.underline {
        modifiers |= Modifier::UNDERLINED;
    }
    style.add_modifier(modifiers)
}

/// Splits one source line into raw and styled segments using the highlighter.
pub fn styled_line<'a>(line: &'a str, highlighter: &Highlighter, theme: &EditorTheme) -> Line<'a> {
    let mut spans = vec![];
    let mut pos = 0;
    for hs in highlighter.highlight(line) {
        if hs.start > pos {
            spans.push(Span::raw(&line[pos..hs.start]));
        }
        spans.push(Span::styled(
            &line[hs.start..hs.end()],
            to_style(theme.attributes_for(hs.style)),
        ));
        pos = hs.end();
    }
    if pos < line.len() {
        spans.push(Span::raw(&line[pos..]));
    }
    Line::from(spans)
}

pub fn run(path: &Path, markdown: &str, theme: &EditorTheme) -> Result<()> {
    let mut app = App::new(path, markdown, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_block(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_block(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(10),
                KeyCode::PageUp => app.scroll_by(-10),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Block outline panel
    let items: Vec<ListItem> = app
        .outline
        .iter()
        .map(|(label, _)| ListItem::new(Line::from(label.as_str())))
        .collect();
    let outline = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Blocks"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(outline, chunks[0], &mut app.outline_state);

    // Highlighted source panel
    let source = Paragraph::new(app.source.clone())
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .scroll((app.scroll, 0));
    f.render_widget(source, chunks[1]);

    let help = Paragraph::new(Line::from(
        "q: Quit | ↑/k: Previous block | ↓/j: Next block | PgUp/PgDn: Scroll",
    ));
    f.render_widget(help, rows[1]);
}
