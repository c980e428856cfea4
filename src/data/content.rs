// Static page content. The controllers take their items from here instead of
// scraping them out of the markup, so tests can run against the same data.

pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub cta_target: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        image: "/assets/slides/fachada.jpg",
        title: "Colegio Nueva Aurora",
        subtitle: "Formando líderes con valores desde 1987",
        cta: "Conócenos",
        cta_target: "nosotros",
    },
    Slide {
        image: "/assets/slides/laboratorio.jpg",
        title: "Ciencia y tecnología",
        subtitle: "Laboratorios equipados y aula de robótica en todos los niveles",
        cta: "Nuestros niveles",
        cta_target: "niveles",
    },
    Slide {
        image: "/assets/slides/deporte.jpg",
        title: "Deporte y arte",
        subtitle: "Talleres de fútbol, vóley, música y danza durante todo el año",
        cta: "Ver galería",
        cta_target: "galeria",
    },
    Slide {
        image: "/assets/slides/admision.jpg",
        title: "Admisión 2027",
        subtitle: "Vacantes abiertas en Inicial, Primaria y Secundaria",
        cta: "Postula aquí",
        cta_target: "admisiones",
    },
];

pub struct Level {
    pub id: &'static str,
    pub name: &'static str,
    pub ages: &'static str,
    pub description: &'static str,
}

pub const LEVELS: &[Level] = &[
    Level {
        id: "inicial",
        name: "Inicial",
        ages: "3 a 5 años",
        description: "Aprendizaje a través del juego, psicomotricidad e \
                      iniciación musical en ambientes diseñados para los más pequeños.",
    },
    Level {
        id: "primaria",
        name: "Primaria",
        ages: "6 a 11 años",
        description: "Plan lector intensivo, matemática razonada e inglés diario, \
                      con acompañamiento personalizado por tutores.",
    },
    Level {
        id: "secundaria",
        name: "Secundaria",
        ages: "12 a 16 años",
        description: "Preparación preuniversitaria, orientación vocacional y \
                      proyectos de ciencia, humanidades y emprendimiento.",
    },
];

pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Años de trayectoria", target: 38, suffix: "" },
    Stat { label: "Estudiantes", target: 1250, suffix: "" },
    Stat { label: "Docentes titulados", target: 86, suffix: "" },
    Stat { label: "Ingreso a universidades", target: 94, suffix: "%" },
];

pub struct GalleryItem {
    pub thumb: &'static str,
    pub full: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        thumb: "/assets/galeria/patio-thumb.jpg",
        full: "/assets/galeria/patio.jpg",
        caption: "Patio central y losas deportivas",
    },
    GalleryItem {
        thumb: "/assets/galeria/biblioteca-thumb.jpg",
        full: "/assets/galeria/biblioteca.jpg",
        caption: "Biblioteca y sala de lectura",
    },
    GalleryItem {
        thumb: "/assets/galeria/robotica-thumb.jpg",
        full: "/assets/galeria/robotica.jpg",
        caption: "Taller de robótica educativa",
    },
    GalleryItem {
        thumb: "/assets/galeria/banda-thumb.jpg",
        full: "/assets/galeria/banda.jpg",
        caption: "Banda de música en el aniversario",
    },
    GalleryItem {
        thumb: "/assets/galeria/laboratorio-thumb.jpg",
        full: "/assets/galeria/laboratorio.jpg",
        caption: "Laboratorio de ciencias",
    },
    GalleryItem {
        thumb: "/assets/galeria/inicial-thumb.jpg",
        full: "/assets/galeria/inicial.jpg",
        caption: "Juegos del nivel Inicial",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Mis dos hijos estudian aquí desde Inicial. El acompañamiento de \
                los tutores es real: conocen a cada niño por su nombre.",
        name: "Carmen Delgado",
        role: "Madre de familia · Primaria",
    },
    Testimonial {
        quote: "Entré en tercero de secundaria y la adaptación fue rapidísima. \
                Los talleres de robótica me decidieron por la ingeniería.",
        name: "Diego Paredes",
        role: "Exalumno · Promoción 2023",
    },
    Testimonial {
        quote: "La comunicación con los profesores es constante. Las reuniones \
                no son un trámite, de verdad se conversa sobre cada alumno.",
        name: "Rosa Quispe",
        role: "Madre de familia · Inicial",
    },
    Testimonial {
        quote: "El plan lector y el nivel de inglés marcaron la diferencia \
                cuando mi hija postuló a la universidad.",
        name: "Jorge Salinas",
        role: "Padre de familia · Secundaria",
    },
    Testimonial {
        quote: "Como exalumna volví a matricular a mi hijo sin dudarlo. La \
                formación en valores sigue siendo el sello del colegio.",
        name: "Patricia Rojas",
        role: "Exalumna y madre de familia",
    },
    Testimonial {
        quote: "Los profesores de ciencias nos empujaron a presentar nuestro \
                proyecto a la feria nacional. Ganamos el segundo puesto.",
        name: "Lucía Mendoza",
        role: "Alumna · 5.º de Secundaria",
    },
];

pub struct NewsItem {
    pub date: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        date: "15 de julio, 2026",
        title: "Segundo puesto en la Feria Nacional de Ciencias",
        summary: "El equipo de 5.º de Secundaria obtuvo el segundo lugar nacional \
                  con su proyecto de riego automatizado de bajo costo.",
        image: "/assets/noticias/feria-ciencias.jpg",
    },
    NewsItem {
        date: "28 de junio, 2026",
        title: "Nueva aula de innovación inaugurada",
        summary: "Primaria y Secundaria ya usan la nueva aula con impresoras 3D, \
                  kits de robótica y pizarras interactivas.",
        image: "/assets/noticias/aula-innovacion.jpg",
    },
    NewsItem {
        date: "10 de junio, 2026",
        title: "Campeones interescolares de vóley",
        summary: "La selección femenina se coronó campeona del torneo \
                  interescolar distrital por tercer año consecutivo.",
        image: "/assets/noticias/voley.jpg",
    },
];

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub enum NavEntry {
    Link(NavLink),
    Dropdown {
        label: &'static str,
        target: &'static str,
        links: &'static [NavLink],
    },
}

pub const NAV: &[NavEntry] = &[
    NavEntry::Link(NavLink { label: "Inicio", target: "inicio" }),
    NavEntry::Link(NavLink { label: "Nosotros", target: "nosotros" }),
    NavEntry::Dropdown {
        label: "Niveles",
        target: "niveles",
        links: &[
            NavLink { label: "Inicial", target: "inicial" },
            NavLink { label: "Primaria", target: "primaria" },
            NavLink { label: "Secundaria", target: "secundaria" },
        ],
    },
    NavEntry::Link(NavLink { label: "Galería", target: "galeria" }),
    NavEntry::Link(NavLink { label: "Testimonios", target: "testimonios" }),
    NavEntry::Link(NavLink { label: "Noticias", target: "noticias" }),
    NavEntry::Link(NavLink { label: "Admisiones", target: "admisiones" }),
];
