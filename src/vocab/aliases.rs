//! Static alias table mapping lowercase skill spellings to canonical forms.
//!
//! Keys must be lowercase (lookups happen after normalization). Values are
//! the display spellings emitted everywhere downstream.

/// Alias -> canonical display name. Grouped by rough category; order is
/// cosmetic, lookups go through a hash map.
pub(crate) const SKILL_ALIASES: &[(&str, &str)] = &[
    // Programming languages
    ("javascript", "JavaScript"),
    ("js", "JavaScript"),
    ("typescript", "TypeScript"),
    ("ts", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("c++", "C++"),
    ("cpp", "C++"),
    ("c#", "C#"),
    ("csharp", "C#"),
    ("c", "C"),
    ("go", "Go"),
    ("golang", "Go"),
    ("rust", "Rust"),
    ("ruby", "Ruby"),
    ("php", "PHP"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("scala", "Scala"),
    ("r", "R"),
    ("perl", "Perl"),
    ("dart", "Dart"),
    ("lua", "Lua"),
    ("shell", "Shell"),
    ("bash", "Bash"),
    ("powershell", "PowerShell"),
    // Web basics
    ("html", "HTML"),
    ("html5", "HTML"),
    ("css", "CSS"),
    ("css3", "CSS"),
    ("sass", "Sass"),
    ("scss", "SCSS"),
    ("less", "Less"),
    // Frontend frameworks
    ("react", "React"),
    ("reactjs", "React"),
    ("react.js", "React"),
    ("vue", "Vue"),
    ("vuejs", "Vue"),
    ("vue.js", "Vue"),
    ("angular", "Angular"),
    ("angularjs", "Angular"),
    ("svelte", "Svelte"),
    ("next", "Next.js"),
    ("nextjs", "Next.js"),
    ("next.js", "Next.js"),
    ("nuxt", "Nuxt.js"),
    ("nuxtjs", "Nuxt.js"),
    ("nuxt.js", "Nuxt.js"),
    ("gatsby", "Gatsby"),
    ("ember", "Ember.js"),
    ("emberjs", "Ember.js"),
    // CSS frameworks
    ("tailwind", "Tailwind CSS"),
    ("tailwindcss", "Tailwind CSS"),
    ("tailwind css", "Tailwind CSS"),
    ("bootstrap", "Bootstrap"),
    ("bulma", "Bulma"),
    ("materialize", "Materialize"),
    ("material-ui", "Material-UI"),
    ("materialui", "Material-UI"),
    ("mui", "Material-UI"),
    ("chakra", "Chakra UI"),
    ("chakra ui", "Chakra UI"),
    ("chakraui", "Chakra UI"),
    ("styled-components", "Styled Components"),
    ("styled components", "Styled Components"),
    // Backend frameworks
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    ("node.js", "Node.js"),
    ("express", "Express"),
    ("expressjs", "Express"),
    ("express.js", "Express"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("fastapi", "FastAPI"),
    ("spring", "Spring"),
    ("springboot", "Spring Boot"),
    ("spring boot", "Spring Boot"),
    ("rails", "Ruby on Rails"),
    ("ruby on rails", "Ruby on Rails"),
    ("ror", "Ruby on Rails"),
    ("laravel", "Laravel"),
    ("symfony", "Symfony"),
    ("asp.net", "ASP.NET"),
    ("aspnet", "ASP.NET"),
    (".net", ".NET"),
    ("dotnet", ".NET"),
    ("nestjs", "NestJS"),
    ("nest.js", "NestJS"),
    ("koa", "Koa"),
    ("hapi", "Hapi"),
    // Mobile
    ("react native", "React Native"),
    ("reactnative", "React Native"),
    ("react-native", "React Native"),
    ("flutter", "Flutter"),
    ("ionic", "Ionic"),
    ("xamarin", "Xamarin"),
    ("android", "Android"),
    ("ios", "iOS"),
    // Databases
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("mongo", "MongoDB"),
    ("redis", "Redis"),
    ("sqlite", "SQLite"),
    ("oracle", "Oracle"),
    ("sql server", "SQL Server"),
    ("mssql", "SQL Server"),
    ("mariadb", "MariaDB"),
    ("cassandra", "Cassandra"),
    ("couchdb", "CouchDB"),
    ("dynamodb", "DynamoDB"),
    ("firebase", "Firebase"),
    ("firestore", "Firestore"),
    ("neo4j", "Neo4j"),
    ("elasticsearch", "Elasticsearch"),
    ("sql", "SQL"),
    ("nosql", "NoSQL"),
    // ORMs
    ("mongoose", "Mongoose"),
    ("sequelize", "Sequelize"),
    ("prisma", "Prisma"),
    ("sqlalchemy", "SQLAlchemy"),
    ("typeorm", "TypeORM"),
    ("hibernate", "Hibernate"),
    // Cloud and devops
    ("aws", "AWS"),
    ("amazon web services", "AWS"),
    ("azure", "Azure"),
    ("gcp", "GCP"),
    ("google cloud", "GCP"),
    ("google cloud platform", "GCP"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("k8s", "Kubernetes"),
    ("jenkins", "Jenkins"),
    ("circleci", "CircleCI"),
    ("travis", "Travis CI"),
    ("travisci", "Travis CI"),
    ("travis ci", "Travis CI"),
    ("github actions", "GitHub Actions"),
    ("gitlab ci", "GitLab CI"),
    ("terraform", "Terraform"),
    ("ansible", "Ansible"),
    ("nginx", "Nginx"),
    ("apache", "Apache"),
    ("linux", "Linux"),
    ("ubuntu", "Ubuntu"),
    ("heroku", "Heroku"),
    ("vercel", "Vercel"),
    ("netlify", "Netlify"),
    ("digitalocean", "DigitalOcean"),
    // Version control
    ("git", "Git"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("bitbucket", "Bitbucket"),
    ("svn", "SVN"),
    // Testing
    ("jest", "Jest"),
    ("mocha", "Mocha"),
    ("chai", "Chai"),
    ("jasmine", "Jasmine"),
    ("cypress", "Cypress"),
    ("selenium", "Selenium"),
    ("puppeteer", "Puppeteer"),
    ("playwright", "Playwright"),
    ("pytest", "Pytest"),
    ("unittest", "unittest"),
    ("junit", "JUnit"),
    ("rspec", "RSpec"),
    // Data science and ML
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("keras", "Keras"),
    ("scikit-learn", "Scikit-learn"),
    ("sklearn", "Scikit-learn"),
    ("pandas", "Pandas"),
    ("numpy", "NumPy"),
    ("matplotlib", "Matplotlib"),
    ("seaborn", "Seaborn"),
    ("jupyter", "Jupyter"),
    ("opencv", "OpenCV"),
    ("nltk", "NLTK"),
    ("spacy", "SpaCy"),
    // APIs and protocols
    ("rest", "REST"),
    ("restful", "REST"),
    ("graphql", "GraphQL"),
    ("grpc", "gRPC"),
    ("websocket", "WebSocket"),
    ("websockets", "WebSocket"),
    ("soap", "SOAP"),
    // Tooling and everything else
    ("webpack", "Webpack"),
    ("babel", "Babel"),
    ("vite", "Vite"),
    ("rollup", "Rollup"),
    ("parcel", "Parcel"),
    ("gulp", "Gulp"),
    ("grunt", "Grunt"),
    ("npm", "npm"),
    ("yarn", "Yarn"),
    ("pnpm", "pnpm"),
    ("redux", "Redux"),
    ("mobx", "MobX"),
    ("zustand", "Zustand"),
    ("recoil", "Recoil"),
    ("rxjs", "RxJS"),
    ("socket.io", "Socket.IO"),
    ("socketio", "Socket.IO"),
    ("jwt", "JWT"),
    ("oauth", "OAuth"),
    ("oauth2", "OAuth 2.0"),
    ("oauth 2.0", "OAuth 2.0"),
    ("stripe", "Stripe"),
    ("twilio", "Twilio"),
    ("sendgrid", "SendGrid"),
    ("figma", "Figma"),
    ("sketch", "Sketch"),
    ("adobe xd", "Adobe XD"),
    ("photoshop", "Photoshop"),
    ("illustrator", "Illustrator"),
    ("jira", "Jira"),
    ("confluence", "Confluence"),
    ("slack", "Slack"),
    ("trello", "Trello"),
    ("notion", "Notion"),
    ("agile", "Agile"),
    ("scrum", "Scrum"),
    ("kanban", "Kanban"),
];
