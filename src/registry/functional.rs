use super::{ColorEntry, FunctionalGroup, FunctionalSubgroup, TokenKey};

const fn step(token: u16, value: &'static str) -> ColorEntry {
    ColorEntry {
        token: TokenKey::Step(token),
        value,
        usage: None,
    }
}

const SUCCESS: FunctionalSubgroup = FunctionalSubgroup {
    key: "success",
    slug: "tp-success",
    name: "Success",
    colors: &[
        step(50, "#ECFDF3"),
        step(100, "#D1FADF"),
        step(200, "#A6F4C5"),
        step(300, "#6CE9A6"),
        step(400, "#32D583"),
        step(500, "#12B76A"),
        step(600, "#039855"),
        step(700, "#027A48"),
        step(800, "#05603A"),
        step(900, "#054F31"),
    ],
};

const WARNING: FunctionalSubgroup = FunctionalSubgroup {
    key: "warning",
    slug: "tp-warning",
    name: "Warning",
    colors: &[
        step(50, "#FFFAEB"),
        step(100, "#FEF0C7"),
        step(200, "#FEDF89"),
        step(300, "#FEC84B"),
        step(400, "#FDB022"),
        step(500, "#F79009"),
        step(600, "#DC6803"),
        step(700, "#B54708"),
        step(800, "#93370D"),
        step(900, "#7A2E0E"),
    ],
};

const ERROR: FunctionalSubgroup = FunctionalSubgroup {
    key: "error",
    slug: "tp-error",
    name: "Error",
    colors: &[
        step(50, "#FEF3F2"),
        step(100, "#FEE4E2"),
        step(200, "#FECDCA"),
        step(300, "#FDA29B"),
        step(400, "#F97066"),
        step(500, "#F04438"),
        step(600, "#D92D20"),
        step(700, "#B42318"),
        step(800, "#912018"),
        step(900, "#7A271A"),
    ],
};

const INFO: FunctionalSubgroup = FunctionalSubgroup {
    key: "info",
    slug: "tp-info",
    name: "Info",
    colors: &[
        step(50, "#EFF8FF"),
        step(100, "#D1E9FF"),
        step(200, "#B2DDFF"),
        step(300, "#84CAFF"),
        step(400, "#53B1FD"),
        step(500, "#2E90FA"),
        step(600, "#1570EF"),
        step(700, "#175CD3"),
        step(800, "#1849A9"),
        step(900, "#194185"),
    ],
};

pub(super) const FUNCTIONAL: FunctionalGroup = FunctionalGroup {
    key: "functional",
    name: "Functional",
    description: "Status scales for validation, alerts, clinical flags and system feedback.",
    subgroups: &[SUCCESS, WARNING, ERROR, INFO],
};
