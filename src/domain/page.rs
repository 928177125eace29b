// Page catalogue for the client-side routes
use serde::Serialize;

pub const PRINCIPLES: [&str; 4] = [
    "Goal Setting",
    "Rebalancing",
    "Risk Tolerance",
    "Long-Term Thinking",
];

const STARTING_BALANCE: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Game,
    Portfolio,
    Investor,
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/game" => Some(Route::Game),
            "/portfolio" => Some(Route::Portfolio),
            "/investor" => Some(Route::Investor),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Game => "/game",
            Route::Portfolio => "/portfolio",
            Route::Investor => "/investor",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Holding {
    pub name: String,
    pub amount: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub route: Route,
    pub heading: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<MenuItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holdings: Vec<Holding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub principles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

impl Page {
    fn bare(route: Route, heading: &str, body: &str) -> Self {
        Self {
            route,
            heading: heading.to_string(),
            body: body.to_string(),
            menu: Vec::new(),
            holdings: Vec::new(),
            balance: None,
            principles: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => Page {
                menu: vec![
                    menu_item("Portfolio Management", Route::Portfolio),
                    menu_item("Investor Principles", Route::Investor),
                ],
                ..Page::bare(
                    route,
                    "Educational Social Media Stock Trading",
                    "Teach financially illiterate people investor principles in a fun way, \
                     using social media and music streaming data as \"stocks.\" Earn rewards \
                     while learning!",
                )
            },
            Route::Game => Page {
                menu: vec![menu_item("Home", Route::Home)],
                ..Page::bare(route, "Game", "Coming soon.")
            },
            Route::Portfolio => Page {
                holdings: default_holdings(),
                actions: vec!["Chat".to_string()],
                ..Page::bare(route, "Market Dashboard", "AI Assistant is here to help")
            },
            Route::Investor => Page {
                holdings: default_holdings(),
                balance: Some(STARTING_BALANCE),
                principles: PRINCIPLES.iter().map(|p| p.to_string()).collect(),
                actions: vec!["Buy".to_string(), "Sell".to_string()],
                ..Page::bare(route, "Market Dashboard", "AI Assistant is here to help")
            },
        }
    }
}

fn menu_item(name: &str, route: Route) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        path: route.path().to_string(),
    }
}

fn default_holdings() -> Vec<Holding> {
    vec![
        Holding {
            name: "YouTube Music".to_string(),
            amount: 250,
        },
        Holding {
            name: "TikTok Trends".to_string(),
            amount: 150,
        },
    ]
}
