//! Static studio content shown on the landing screen

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Team,
    Services,
    Portfolio,
    Blog,
    Contact,
}

impl Section {
    pub fn all() -> Vec<Section> {
        vec![
            Section::Home,
            Section::Team,
            Section::Services,
            Section::Portfolio,
            Section::Blog,
            Section::Contact,
        ]
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Team => "team",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    pub fn from_anchor(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|section| section.anchor() == s.to_lowercase())
    }

    /// Label in the navigation bar
    pub fn nav_title(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Team => "О команде",
            Section::Services => "Услуги",
            Section::Portfolio => "Портфолио",
            Section::Blog => "Блог",
            Section::Contact => "Контакты",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Section::Home => "Создаём сайты будущего",
            Section::Team => "О команде",
            Section::Services => "Услуги",
            Section::Portfolio => "Портфолио",
            Section::Blog => "Блог",
            Section::Contact => "Свяжитесь с нами",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Section::Home => "Разработка веб-приложений, которые выделяются. Превращаем идеи в цифровые продукты мирового уровня.",
            Section::Team => "Эксперты, которые делают невозможное возможным",
            Section::Services => "Полный цикл создания цифровых продуктов",
            Section::Portfolio => "Проекты, которыми мы гордимся",
            Section::Blog => "Делимся знаниями и опытом",
            Section::Contact => "Готовы начать ваш проект? Напишите нам!",
        }
    }

    pub fn cards(&self) -> &'static [Card] {
        match self {
            Section::Home => &[],
            Section::Team => TEAM,
            Section::Services => SERVICES,
            Section::Portfolio => PORTFOLIO,
            Section::Blog => BLOG,
            Section::Contact => CONTACT_LINKS,
        }
    }
}

/// One content block: a stat, a service, a project, a post or a contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    /// Date, link or other small print
    pub meta: Option<&'static str>,
    pub tags: &'static [&'static str],
}

const fn card(title: &'static str, description: &'static str) -> Card {
    Card {
        title,
        description,
        meta: None,
        tags: &[],
    }
}

const TEAM: &[Card] = &[
    card("15+ экспертов", "Дизайнеры, разработчики, маркетологи"),
    card("50+ проектов", "Успешно запущенных приложений"),
    card("5 лет опыта", "В разработке цифровых продуктов"),
];

const SERVICES: &[Card] = &[
    card("Веб-дизайн", "Современные UI/UX решения для вашего бизнеса"),
    card("Разработка", "Frontend и Backend на современных технологиях"),
    card("Мобильные приложения", "iOS и Android разработка"),
    card("E-commerce", "Интернет-магазины с полным функционалом"),
    card("SEO оптимизация", "Продвижение и аналитика вашего сайта"),
    card("Поддержка", "Техподдержка 24/7 и обновления"),
];

const PORTFOLIO: &[Card] = &[
    Card {
        title: "TechStartup Dashboard",
        description: "Панель управления для стартапа с real-time аналитикой",
        meta: None,
        tags: &["React", "Node.js", "PostgreSQL"],
    },
    Card {
        title: "Fashion E-commerce",
        description: "Интернет-магазин модной одежды с AI-рекомендациями",
        meta: None,
        tags: &["Next.js", "Stripe", "AI"],
    },
    Card {
        title: "HealthTech Platform",
        description: "Платформа для записи к врачам и телемедицины",
        meta: None,
        tags: &["React Native", "Python", "WebRTC"],
    },
    Card {
        title: "CryptoTrading Bot",
        description: "Автоматизированная система торговли криптовалютой",
        meta: None,
        tags: &["Python", "ML", "Binance API"],
    },
];

const BLOG: &[Card] = &[
    Card {
        title: "Тренды веб-дизайна 2024",
        description: "Какие стили и подходы будут актуальны в новом году",
        meta: Some("15 декабря 2024"),
        tags: &[],
    },
    Card {
        title: "React vs Vue: что выбрать?",
        description: "Сравнение популярных фреймворков для вашего проекта",
        meta: Some("10 декабря 2024"),
        tags: &[],
    },
    Card {
        title: "SEO в 2024: новые правила",
        description: "Как продвигать сайты после обновлений поисковиков",
        meta: Some("5 декабря 2024"),
        tags: &[],
    },
];

const CONTACT_LINKS: &[Card] = &[
    Card {
        title: "Telegram канал",
        description: "@FreeWebCreator",
        meta: Some("https://t.me/FreeWebCreator"),
        tags: &[],
    },
    Card {
        title: "Секретный чат",
        description: "Закрытое сообщество",
        meta: Some("https://t.me/+pJ_2ss_PeTplYzgy"),
        tags: &[],
    },
    Card {
        title: "Связь напрямую",
        description: "@InfernoClient",
        meta: Some("https://t.me/InfernoClient"),
        tags: &[],
    },
];

/// Prompts shown in the generator dialog
pub const EXAMPLE_DESCRIPTIONS: &[&str] = &[
    "Лендинг для фитнес-клуба с тарифами и расписанием",
    "Портфолио фотографа с галереей работ",
    "Сайт-визитка юридической компании",
    "Интернет-магазин hand-made украшений",
];

pub const FOOTER: &str = "© 2024 POEHALI.DEV. Все права защищены.";
