//! Fixed response blocks for the simple commands.
//!
//! Each block starts with a newline so a blank line separates it from the
//! echoed command, matching the terminal's visual rhythm. Blocks are
//! returned verbatim; the typed-reveal engine animates them character by
//! character, newlines included.

/// `help` -- the command index.
pub const HELP: &str = "
Available commands:
- help: Show this help message
- about: Learn about me
- education: View my educational background
- skills: View my technical skills
- projects: See my projects
- projects [number]: View detailed information about a specific project
- contact: Get my contact information
- clear: Clear the terminal";

/// `about` -- the introduction block.
pub const ABOUT: &str = "
About Me - Bagriyan Borisov
---------------------------
Junior Software Developer specializing in C# and ASP.NET Core
with a passion for crafting efficient, scalable solutions and enhancing user experiences.
I thrive in collaborative teams, enjoy solving complex problems, and continuously seek to
learn and adapt to new technologies.


I believe in writing clean, maintainable code and following best practices in software development.
My goal is to create applications that make a positive impact on users' lives.";

/// `skills` -- the technical skills block.
pub const SKILLS: &str = "
Technical Skills
---------------
Frontend Development:
- React.js, TypeScript, JavaScript (ES6+)
- HTML5, CSS3

Backend Development:
- C#, ASP.NET Core
- T-SQL, Entity Framework Core
- HTTP, REST, Web API, SignalR
- Unit Testing, Azure CI/CD

Databases:
- SQL Server
- MongoDB

DevOps & Tools:
- Git, GitHub
- Linux/Unix systems

Soft Skills:
- Problem-solving
- Team collaboration
- Project management
- Technical documentation
- Adaptability
- Patience
- Communication";

/// `contact` -- contact details. The bare `github.com/...` and
/// `linkedin.com/...` forms are deliberate; the hyperlink scanner picks them
/// up and prefixes `https://` on activation.
pub const CONTACT: &str = "
Contact Information
------------------
Email: bagriyan.dilyanov@abv.bg
GitHub: github.com/BagriyanBorisov
LinkedIn: linkedin.com/in/bagriyan-borisov-a15a95224/
Portfolio: https://bagriyanborisov.github.io/

Feel free to reach out for:
- Job opportunities
- Collaboration on projects";
