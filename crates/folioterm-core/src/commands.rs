//! The built-in portfolio commands.
//!
//! Seven commands, fixed set: `help`, `about`, `education`, `skills`,
//! `projects`, `contact`, `clear`. All content comes from the
//! `folioterm-content` crate; command logic here is limited to argument
//! handling and assembling the education block's action runs.

use folioterm_content::{blocks, education, projects};

use crate::interpreter::{Command, CommandOutput, CommandRegistry};
use crate::richtext::{RichText, Run};

/// Register the full command set in presentation order.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCmd));
    registry.register(Box::new(AboutCmd));
    registry.register(Box::new(EducationCmd));
    registry.register(Box::new(SkillsCmd));
    registry.register(Box::new(ProjectsCmd));
    registry.register(Box::new(ContactCmd));
    registry.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str]) -> CommandOutput {
        CommandOutput::Text(blocks::HELP.to_string())
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str]) -> CommandOutput {
        CommandOutput::Text(blocks::ABOUT.to_string())
    }
}

// ---------------------------------------------------------------------------
// education
// ---------------------------------------------------------------------------

struct EducationCmd;
impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn execute(&self, _args: &[&str]) -> CommandOutput {
        let mut rich = RichText::plain(education::HEADER);
        for cert in education::CERTIFICATIONS {
            rich.push(Run::Text("\n".to_string()));
            rich.push(Run::Action {
                cert: cert.asset.to_string(),
                label: cert.line(),
            });
        }
        CommandOutput::Certifications(rich)
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn execute(&self, _args: &[&str]) -> CommandOutput {
        CommandOutput::Text(blocks::SKILLS.to_string())
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn execute(&self, args: &[&str]) -> CommandOutput {
        let Some(arg) = args.first() else {
            return CommandOutput::Text(projects::LIST.to_string());
        };
        let text = match arg.parse::<i64>() {
            Ok(n) => match projects::detail(n) {
                Some(block) => block.to_string(),
                None => not_found(&n.to_string()),
            },
            // Non-numeric index: same not-found shape, argument quoted
            // verbatim.
            Err(_) => not_found(arg),
        };
        CommandOutput::Text(text)
    }
}

fn not_found(arg: &str) -> String {
    format!(
        "Project number {arg} not found. Available projects: {}",
        projects::AVAILABLE
    )
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &[&str]) -> CommandOutput {
        CommandOutput::Text(blocks::CONTACT.to_string())
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str]) -> CommandOutput {
        CommandOutput::Clear
    }
}
