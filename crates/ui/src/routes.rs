/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    List,
    Dashboard,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Add,
        MenuAction::List,
        MenuAction::Dashboard,
        MenuAction::Exit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add Problem",
            MenuAction::List => "List Problems",
            MenuAction::Dashboard => "Dashboard",
            MenuAction::Exit => "Exit",
        }
    }

    #[must_use]
    pub fn key(self) -> char {
        match self {
            MenuAction::Add => '1',
            MenuAction::List => '2',
            MenuAction::Dashboard => '3',
            MenuAction::Exit => '4',
        }
    }

    /// Accepts the menu number or the first word of the label, case-insensitive.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let choice = input.trim().to_ascii_lowercase();
        match choice.as_str() {
            "1" | "add" | "a" => Some(MenuAction::Add),
            "2" | "list" | "l" => Some(MenuAction::List),
            "3" | "dashboard" | "d" => Some(MenuAction::Dashboard),
            "4" | "exit" | "quit" | "q" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

#[must_use]
pub fn render_menu() -> String {
    let mut out = String::from("LeetCode Problem Tracker\n");
    for action in MenuAction::ALL {
        out.push_str(&format!("  {}) {}\n", action.key(), action.label()));
    }
    out
}
