crate::define_id_enum! {
    /// Framework identifier spanning the JavaScript and Python ecosystems
    FrameworkId {
        Nextjs => "nextjs" : "Next.js",
        Nuxt => "nuxt" : "Nuxt",
        Vue => "vue" : "Vue.js",
        React => "react" : "React",
        ReactVite => "react-vite" : "React + Vite",
        ReactCra => "react-cra" : "Create React App",
        Express => "express" : "Express.js",
        Fastify => "fastify" : "Fastify",
        Nestjs => "nestjs" : "NestJS",
        Hono => "hono" : "Hono",
        Sveltekit => "sveltekit" : "SvelteKit",
        Svelte => "svelte" : "Svelte",
        Astro => "astro" : "Astro",
        Remix => "remix" : "Remix",
        Fastapi => "fastapi" : "FastAPI",
        Django => "django" : "Django",
        Flask => "flask" : "Flask",
        Starlette => "starlette" : "Starlette",
        Tornado => "tornado" : "Tornado",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_id_serialization() {
        assert_eq!(
            serde_json::to_string(&FrameworkId::Nextjs).unwrap(),
            "\"nextjs\""
        );
        assert_eq!(
            serde_json::to_string(&FrameworkId::ReactVite).unwrap(),
            "\"react-vite\""
        );
    }

    #[test]
    fn test_framework_id_name() {
        assert_eq!(FrameworkId::Nextjs.name(), "Next.js");
        assert_eq!(FrameworkId::ReactCra.name(), "Create React App");
    }

    #[test]
    fn test_custom_framework_deserialization() {
        let deserialized: FrameworkId = serde_json::from_str("\"qwik\"").unwrap();
        assert_eq!(deserialized, FrameworkId::Custom("qwik".to_string()));
        assert_eq!(deserialized.name(), "qwik");
    }
}
