use std::collections::HashSet;

use tracing::warn;

use crate::router::normalize::{alias, slug};

use super::model::{
    AssetRef, Documents, Screen, ScreenContent, Template, TextCommand,
};

/// Turns one document fetch into the ordered screen list: the four
/// templates first, then text commands, then audio commands. Targets are
/// unique; an authored command whose title lands on a taken target is
/// dropped.
pub fn screens(documents: Documents) -> Vec<Screen> {
    let Documents {
        mut about,
        mut shows,
        mut music,
        mut contact,
        text_commands,
        audio_commands,
    } = documents;

    let mut screens = Vec::new();

    for template in Template::ALL {
        let content = match template {
            Template::About => about.take().map(ScreenContent::About),
            Template::Shows => shows.take().map(ScreenContent::Shows),
            Template::Music => music.take().map(ScreenContent::Music),
            Template::Contact => contact.take().map(ScreenContent::Contact),
        };

        if let Some(content) = content {
            screens.push(Screen {
                target: template.target().to_string(),
                commands: template.commands().iter().map(|c| c.to_string()).collect(),
                hidden: false,
                content,
            });
        }
    }

    let mut taken: HashSet<String> = screens.iter().map(|s| s.target.clone()).collect();

    for entry in text_commands.map(|list| list.commands).unwrap_or_default() {
        let content = ScreenContent::Text(TextCommand {
            kind: entry.kind,
            result: entry.result,
        });
        screens.extend(
            authored(&entry.title, &entry.command, entry.hidden, content)
                .filter(|screen| claim(&mut taken, screen)),
        );
    }

    for entry in audio_commands.map(|list| list.commands).unwrap_or_default() {
        let Some(url) = entry.url else {
            warn!(title = entry.title.as_str(), "audio_command_without_file");
            continue;
        };
        let content = ScreenContent::Audio(AssetRef::new(url));
        screens.extend(
            authored(&entry.title, &entry.command, entry.hidden, content)
                .filter(|screen| claim(&mut taken, screen)),
        );
    }

    screens
}

/// The CMS stores aliases as one comma separated string.
pub fn split_commands(command: &str) -> Vec<String> {
    command
        .split(',')
        .map(alias)
        .filter(|command| !command.is_empty())
        .collect()
}

fn claim(taken: &mut HashSet<String>, screen: &Screen) -> bool {
    if taken.insert(screen.target.clone()) {
        return true;
    }
    warn!(screen = screen.target.as_str(), "command_target_taken");
    false
}

fn authored(
    title: &str,
    command: &str,
    hidden: Option<bool>,
    content: ScreenContent,
) -> Option<Screen> {
    let target = slug(title);
    if target.is_empty() {
        warn!(title, "command_without_usable_title");
        return None;
    }

    Some(Screen {
        target,
        commands: split_commands(command),
        hidden: hidden.unwrap_or(false),
        content,
    })
}
