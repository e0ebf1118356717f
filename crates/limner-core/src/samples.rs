//! Reference Mermaid sources and sample diagram requests.
//!
//! The sources are small, renderable diagrams for each family. They are
//! reachable through [`DiagramType::sample_source`](crate::diagram::DiagramType::sample_source).

/// Sample flowchart with a decision node.
pub const FLOWCHART: &str = "flowchart TD
    A[Start] --> B{Decision?}
    B -->|Yes| C[Action 1]
    B -->|No| D[Action 2]
    C --> E[End]
    D --> E";

/// Sample mindmap with one root and four branches.
pub const MINDMAP: &str = "mindmap
  root((Project Planning))
    Research
      Market Analysis
      Competitor Study
      User Interviews
    Design
      Wireframes
      Prototypes
      User Testing
    Development
      Frontend
      Backend
      Database
    Launch
      Marketing
      Deployment
      Analytics";

/// Sample sequence diagram of a form submission.
pub const SEQUENCE: &str = "sequenceDiagram
    participant User
    participant App
    participant Database

    User->>App: Submit form
    App->>Database: Save data
    Database-->>App: Confirmation
    App-->>User: Success message";

/// Sample class diagram with two classes.
pub const CLASS: &str = "classDiagram
    class User {
        +String name
        +String email
        +login()
        +logout()
    }

    class Project {
        +String title
        +Date created
        +addUser()
        +removeUser()
    }

    User --> Project : creates";

/// Sample three-phase project schedule.
pub const GANTT: &str = "gantt
    title Project Timeline
    dateFormat YYYY-MM-DD
    section Planning
    Research       :2024-01-01, 2w
    Analysis       :2024-01-15, 1w
    section Development
    Setup          :2024-02-01, 3d
    Core Features  :2024-02-04, 2w
    Testing        :2024-02-18, 1w
    section Launch
    Deployment     :2024-03-01, 2d
    Marketing      :2024-03-03, 1w";

/// User messages that each ask for a diagram of a different family, in
/// [`PATTERN_TABLE`](crate::vocabulary::PATTERN_TABLE) order.
pub const SAMPLE_REQUESTS: &[&str] = &[
    "Create a flowchart for my morning routine",
    "Draw a mindmap of web development skills",
    "Show me a sequence diagram for user authentication",
    "Generate a class diagram for a blog system",
    "Create a gantt chart for a 3-month project",
];
