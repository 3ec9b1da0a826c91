//! The project catalogue behind `projects` and `projects [number]`.

/// Valid detail indices, in the order the list presents them.
pub const AVAILABLE: &str = "1, 2, 3, 4";

/// `projects` with no argument -- the featured list.
pub const LIST: &str = "
Featured Projects
---------------
1. VehiclesForSale Website
2. AI-Social-Platform
3. TanothBot
4. Mouse Camera Control

Type 'projects [number]' to view detailed information about a specific project.";

const VEHICLES_FOR_SALE: &str = "
VehiclesForSale Website
----------------------------------------
Description: A full-stack platform for buying and selling vehicles, developed as my bachelor's thesis.

Technologies: ASP.NET Core, Entity Framework Core, SQL Server, Bootstrap, AJAX, jQuery, SignalR, NUnit, Moq

Features:
- User authentication/authorization, listing management, search & filter
- Real-time updates for listings, chat, and notifications
- Responsive design
- Dynamic content loading
- Admin dashboard
- Chat
- Notifications
- Search
- Filter
- Pagination
- Sorting
- CRUD operations
GitHub: github.com/BagriyanBorisov/VehiclesForSale8.0";

const AI_SOCIAL_PLATFORM: &str = "
AI-Social-Platform
----------------------------------------
Description: Soft Uni's Team Lead project \"AI Social Platform\"

This project is Social platform for sharing publications.
Publications have the option to be partially or fully generated by OpenAI.
You could create and edit text/media with the help of OpenAI.

Technologies: .Net Web API, Entity Framework Core, SQL Server, React, Javascript

Features:
- User authentication and authorization
- Real-time updates for publications, chat, and notifications
- Responsive design
- Admin dashboard
- Chat
- Notifications
- Search
- Filter
- Pagination
- Sorting
- CRUD operations
- AI-powered content generation

GitHub: https://github.com/SoftUni-s-Team-Lead-AI-Social-Platform/AI-Social-Platform";

const TANOTH_BOT: &str = "
TanothBot
----------------------------------------
Description: A C# console application that automates your gameplay in the browser-based RPG Tanoth
 by talking directly to the game's XML-RPC API (and WebSocket endpoint).

Automated Adventure Runs:
- Dynamically fetches available adventures
- Picks the best adventure based on configurable scoring (e.g. exp * gold)
- Starts the adventure and waits for its duration (plus a safety buffer)
- Repeats until you've exhausted your daily free adventures
- Also supports a continuous daily loop: runs each day and auto-waits until the daily reset at 01:00
                                          (with randomized keep-alive pings every 20-30 minutes)

  User Interactions:
- Check your user attributes (level, gold, exp, stats, etc.) at any time
- Raise attributes (STR, DEX, CON, INT) interactively via XML-RPC calls
- Live countdown timer in the console during each adventure, with the option to cancel mid-adventure

Technologies: C#, XML-RPC, WebSocket, Puppeteer

GitHub: https://github.com/BagriyanBorisov/TanothBot1.0.1";

const MOUSE_CAMERA_CONTROL: &str = "
Mouse Camera Control
----------------------------------------
Description: A Python application that turns your webcam into a touch-free mouse by recognizing hand gestures and mapping them to cursor actions.
It leverages MediaPipe for hand landmark detection, OpenCV for video capture, and PyAutoGUI for on-screen control.

Technologies: Python, MediaPipe, OpenCV, PyAutoGUI

Features:
- Real-time hand tracking and gesture recognition
- Follows the tip of your index finger in real time.
- Push your pinky finger down to scroll vertically.
- Show a \"peace\" sign (index + middle finger) to trigger a click.
- Pinch your thumb and index finger together to drag-and-drop.

GitHub: https://github.com/BagriyanBorisov/MouseCameraControl";

/// Detail block for project `n`, or `None` outside 1..=4.
pub fn detail(n: i64) -> Option<&'static str> {
    match n {
        1 => Some(VEHICLES_FOR_SALE),
        2 => Some(AI_SOCIAL_PLATFORM),
        3 => Some(TANOTH_BOT),
        4 => Some(MOUSE_CAMERA_CONTROL),
        _ => None,
    }
}
