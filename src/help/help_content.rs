pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("F1 or ?", "Toggle this help (? outside the form)"),
            ("Tab/Shift+Tab", "Cycle focus: Form / Names / Favorites"),
            ("Esc", "Cancel generation, or back to the form"),
            ("Ctrl+C", "Quit"),
            ("q", "Quit (outside the form)"),
        ],
    },
    HelpSection {
        title: "FORM",
        entries: &[
            ("Enter", "Generate names"),
            ("Up/Down", "Move between fields"),
        ],
    },
    HelpSection {
        title: "NAMES",
        entries: &[
            ("Left/Right, h/l", "Select a name card"),
            ("j/k", "Scroll the cards"),
            ("f or Space", "Add or remove favorite"),
            ("s or p", "Play pronunciation"),
            ("y", "Copy the selected name"),
            ("r", "Generate new names"),
            ("e", "Export favorites"),
        ],
    },
    HelpSection {
        title: "FAVORITES",
        entries: &[
            ("j/k, Up/Down", "Select a favorite"),
            ("d or f", "Remove favorite"),
            ("s or p", "Play pronunciation"),
            ("y", "Copy all favorites"),
            ("e", "Export favorites"),
        ],
    },
];

pub const HELP_FOOTER: &str = "j/k: scroll | F1/?/Esc: close";
