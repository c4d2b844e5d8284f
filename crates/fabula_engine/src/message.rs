//! Message templating.
//!
//! Story text may carry bracketed codes that are rewritten on output:
//!
//! - Person codes: `[You]`, `[your]`, `[You're]` … become "I", "my", "I'm"
//!   in first person
//! - Object codes: `[object]`, `[a object]`, `[The object]` … name the
//!   message subject with the right article
//! - List codes: `[list]`, `[the list]`, `[the options]` … join several
//!   subjects with commas and "and" (or "or")
//! - Choice codes: `[You drop|I've dropped]` pick the left side in third
//!   person and the right side in first person
//!
//! Naming an entity or location through an object or list code marks it
//! seen, which switches later `[a object]` codes to "the".

use tracing::warn;

use fabula_world::World;

/// A message subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    /// An entity, by key.
    Entity(String),
    /// A location, by key.
    Location(String),
    /// A free-standing name, such as an exit.
    Named {
        /// Display name.
        name: String,
        /// Proper names take no article.
        proper: bool,
        /// Collective names take no indefinite article.
        many: bool,
    },
}

impl Subject {
    /// A proper name.
    #[must_use]
    pub fn proper(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            proper: true,
            many: false,
        }
    }
}

/// The subject(s) a message talks about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Param {
    /// No subject.
    #[default]
    None,
    /// A single subject.
    One(Subject),
    /// Several subjects, for list codes.
    Many(Vec<Subject>),
}

impl Param {
    /// An entity subject.
    #[must_use]
    pub fn entity(key: impl Into<String>) -> Self {
        Self::One(Subject::Entity(key.into()))
    }

    /// A location subject.
    #[must_use]
    pub fn location(key: impl Into<String>) -> Self {
        Self::One(Subject::Location(key.into()))
    }

    /// A list of entity subjects.
    #[must_use]
    pub fn entities<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(keys.into_iter().map(|k| Subject::Entity(k.into())).collect())
    }

    fn items(&self) -> &[Subject] {
        match self {
            Self::None => &[],
            Self::One(subject) => std::slice::from_ref(subject),
            Self::Many(subjects) => subjects,
        }
    }
}

impl From<Vec<Subject>> for Param {
    fn from(subjects: Vec<Subject>) -> Self {
        Self::Many(subjects)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Third- and first-person forms of each person code.
const PERSON_CODES: &[(&str, &str, &str)] = &[
    ("You", "You", "I"),
    ("you", "you", "I"),
    ("me", "you", "me"),
    ("Me", "You", "Me"),
    ("Your", "Your", "My"),
    ("your", "your", "my"),
    ("my", "your", "my"),
    ("mine", "yours", "mine"),
    ("yourself", "yourself", "myself"),
    ("yours", "yours", "mine"),
    ("Yours", "Yours", "Mine"),
    ("You'd", "You'd", "I'd"),
    ("you'd", "you'd", "I'd"),
    ("You're", "You're", "I'm"),
    ("you're", "you're", "I'm"),
    ("You were", "You were", "I was"),
    ("you were", "you were", "I was"),
    ("I am", "You are", "I am"),
    ("You are", "You are", "I am"),
    ("you are", "you are", "I am"),
];

const LIST_CODES: &[&str] = &["list", "a list", "the list", "List", "A list", "The list"];

/// A subject resolved against the world.
struct Named {
    /// Plain name, used for article choice and proper-name codes.
    name: String,
    /// Name with details, used for display.
    full_name: String,
    proper: bool,
    many: bool,
    seen: bool,
}

/// Renders a message with its codes expanded.
///
/// Rendering marks named entities and locations seen.
pub fn render(world: &mut World, text: &str, param: &Param) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let (code, next) = match after.find(']') {
            Some(close) => (&after[..close], &after[close + 1..]),
            None => (after, ""),
        };
        out.push_str(&render_code(world, code, param));
        rest = next;
    }
    out.push_str(rest);
    out
}

fn render_code(world: &mut World, code: &str, param: &Param) -> String {
    let third_person = world.variables.third_person;

    if let Some((_, third, first)) = PERSON_CODES.iter().find(|(c, _, _)| *c == code) {
        return (if third_person { third } else { first }).to_string();
    }

    if code == "the options" {
        return render_list(world, "the object", " or", param);
    }
    if LIST_CODES.contains(&code) {
        let item_code = if code == "list" {
            "object".to_string()
        } else {
            code.replace(" list", " object")
        };
        return render_list(world, &item_code, " and", param);
    }

    if is_object_code(code) {
        let subject = param.items().first().cloned();
        return render_object(world, code, subject.as_ref());
    }

    if let Some((third, first)) = code.split_once('|') {
        return (if third_person { third } else { first }).to_string();
    }

    warn!(code = %code, "unknown message code");
    String::new()
}

fn render_list(world: &mut World, item_code: &str, separator: &str, param: &Param) -> String {
    let items = param.items().to_vec();
    let count = items.len();
    let mut code = item_code.to_string();
    let mut out = String::new();
    for (n, subject) in items.iter().enumerate() {
        out.push_str(&render_object(world, &code, Some(subject)));
        code = code.to_lowercase();
        if n + 2 < count {
            out.push_str(", ");
        } else if n + 1 < count {
            out.push_str(separator);
            out.push(' ');
        }
    }
    out
}

fn is_object_code(code: &str) -> bool {
    matches!(
        code,
        "object" | "A object" | "An object" | "The object" | "a object" | "an object" | "the object"
    )
}

fn render_object(world: &mut World, code: &str, subject: Option<&Subject>) -> String {
    let subject = subject.cloned().unwrap_or_else(|| Subject::proper("that"));
    let named = resolve(world, &subject);

    let text = if named.proper {
        let name = proper_name(&named.name, world.variables.third_person);
        if code.starts_with(['A', 'T']) { capitalize(&name) } else { name }
    } else {
        match code {
            "A object" | "An object" if !named.seen => match indefinite(&named, true) {
                Some(article) => format!("{article} {}", named.full_name),
                None => capitalize(&named.full_name),
            },
            "a object" | "an object" if !named.seen => match indefinite(&named, false) {
                Some(article) => format!("{article} {}", named.full_name),
                None => named.full_name.clone(),
            },
            "A object" | "An object" | "The object" => format!("The {}", named.full_name),
            "a object" | "an object" | "the object" => format!("the {}", named.full_name),
            _ => named.full_name.clone(),
        }
    };

    mark_seen(world, &subject);
    text
}

/// Collective names ("coins", "sand") take no indefinite article.
fn indefinite(named: &Named, capital: bool) -> Option<&'static str> {
    if named.many {
        return None;
    }
    let starts_with_vowel = named
        .name
        .starts_with(['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U']);
    Some(match (starts_with_vowel, capital) {
        (true, true) => "An",
        (true, false) => "an",
        (false, true) => "A",
        (false, false) => "a",
    })
}

fn resolve(world: &World, subject: &Subject) -> Named {
    let inventory_mode = world.variables.inventory_mode;
    match subject {
        Subject::Entity(key) => match world.entity(key) {
            Some(entity) => Named {
                name: entity.state.name.clone(),
                full_name: entity.full_name(inventory_mode, world),
                proper: entity.state.proper,
                many: entity.state.many,
                seen: entity.state.seen,
            },
            None => {
                warn!(key = %key, "message names an unknown entity");
                unnamed(key)
            }
        },
        Subject::Location(key) => match world.location(key) {
            Some(location) => Named {
                name: location.state.name.clone(),
                full_name: location.state.name.clone(),
                proper: true,
                many: false,
                seen: location.state.seen,
            },
            None => {
                warn!(key = %key, "message names an unknown location");
                unnamed(key)
            }
        },
        Subject::Named { name, proper, many } => Named {
            name: name.clone(),
            full_name: name.clone(),
            proper: *proper,
            many: *many,
            seen: false,
        },
    }
}

fn unnamed(key: &str) -> Named {
    Named {
        name: key.to_string(),
        full_name: key.to_string(),
        proper: true,
        many: false,
        seen: false,
    }
}

fn mark_seen(world: &mut World, subject: &Subject) {
    match subject {
        Subject::Entity(key) => {
            if let Some(entity) = world.entity_mut(key) {
                entity.state.seen = true;
            }
        }
        Subject::Location(key) => {
            if let Some(location) = world.location_mut(key) {
                location.state.seen = true;
            }
        }
        Subject::Named { .. } => {}
    }
}

/// Expands `[your]` and `[yours]` inside a proper name.
fn proper_name(name: &str, third_person: bool) -> String {
    if third_person {
        return name.replace("[your]", "your").replace("[yours]", "yours");
    }
    name.replace("[your]", "my").replace("[yours]", "mine")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Indentation
// =============================================================================

/// Appends rendered text to the pending message, applying auto-indent.
///
/// Text that opens a new paragraph loses its leading spaces and gains the
/// indent unless it starts with markup (`<`). Every line break that follows
/// text is then followed by exactly one indent.
pub fn append_indented(pending: &mut String, text: &str, indent: &str) {
    let mut text = text.to_string();
    let blank_paragraph = format!("\n{indent}\n");
    if pending.ends_with('\n') && !pending.ends_with(&blank_paragraph) && !text.starts_with('<') {
        text = format!("{indent}{}", text.trim_start_matches(' '));
    }
    pending.push_str(&text);
    *pending = reindent(pending, indent);
}

fn reindent(text: &str, indent: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != '\n' && chars.get(i + 1) == Some(&'\n') {
            out.push(c);
            out.push('\n');
            i += 2;
            while chars.get(i) == Some(&' ') {
                i += 1;
            }
            out.push_str(indent);
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}
