//! Static catalogue of known Mindcraft settings: per-key descriptions and
//! display categories. Presentation-side only; the document model never
//! consults it, so unknown keys in a file still load and edit fine.

pub struct CatalogEntry {
    pub key: &'static str,
    pub description: &'static str,
}

pub struct Category {
    pub title: &'static str,
    pub entries: &'static [CatalogEntry],
}

const fn entry(key: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { key, description }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        title: "Connection",
        entries: &[
            entry("minecraft_version", "The Minecraft version to connect to (e.g., 1.21.4)"),
            entry("host", "The hostname or IP address of the Minecraft server"),
            entry("port", "The port number of the Minecraft server (default: 55916)"),
            entry("auth", "Authentication method ('offline' for local servers, 'microsoft' for online servers)"),
        ],
    },
    Category {
        title: "Mind Server",
        entries: &[
            entry("host_mindserver", "Whether to host the mind server locally"),
            entry("mindserver_host", "The hostname or IP address of the mind server"),
            entry("mindserver_port", "The port number of the mind server"),
        ],
    },
    Category {
        title: "Agent Configuration",
        entries: &[
            entry("base_profile", "The base profile to use for all agents"),
            entry("profiles", "List of agent profiles to load (JSON array of strings)"),
            entry("load_memory", "Whether to load memory from previous sessions"),
            entry("init_message", "The initial message to send to the agent"),
            entry("only_chat_with", "List of player names the agent will exclusively chat with (JSON array of strings)"),
            entry("speak", "Whether the agent should use text-to-speech"),
            entry("language", "The language code for the agent (e.g., 'en' for English)"),
        ],
    },
    Category {
        title: "Features",
        entries: &[
            entry("show_bot_views", "Whether to show the bot's view in a separate window"),
            entry("allow_insecure_coding", "Whether to allow the agent to write and execute code (CAUTION: security risk)"),
            entry("allow_vision", "Whether to allow the agent to use vision capabilities"),
            entry("blocked_actions", "List of actions that the agent is not allowed to perform (JSON array of strings)"),
        ],
    },
    Category {
        title: "Performance & Limits",
        entries: &[
            entry("code_timeout_mins", "Timeout for code execution in minutes (-1 for no timeout)"),
            entry("relevant_docs_count", "Number of relevant documents to include in context (-1 for all)"),
            entry("max_messages", "Maximum number of messages to keep in history"),
            entry("num_examples", "Number of examples to include in prompts"),
            entry("max_commands", "Maximum number of commands the agent can execute (-1 for unlimited)"),
        ],
    },
    Category {
        title: "Logging & Behavior",
        entries: &[
            entry("verbose_commands", "Whether to show detailed command information"),
            entry("narrate_behavior", "Whether the agent should narrate its behavior"),
            entry("chat_bot_messages", "Whether to show bot messages in chat"),
            entry("log_all_prompts", "Whether to log all prompts for debugging"),
        ],
    },
];

/// Description for a key, when the catalogue knows it.
pub fn description(key: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.entries.iter())
        .find(|entry| entry.key == key)
        .map(|entry| entry.description)
}
