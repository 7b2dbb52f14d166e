//! Topics fetched when no catalog file is supplied.

pub(crate) const BUILTIN_TOPICS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "Python_(programming_language)", "JavaScript", "Java_(programming_language)",
            "C_(programming_language)", "C++", "C_Sharp_(programming_language)",
            "Ruby_(programming_language)", "Go_(programming_language)",
            "Rust_(programming_language)", "Swift_(programming_language)", "PHP", "TypeScript",
            "Kotlin_(programming_language)", "R_(programming_language)", "SQL", "MATLAB", "Perl",
            "Scala_(programming_language)", "Haskell", "Lisp_(programming_language)", "Fortran",
            "COBOL", "Pascal_(programming_language)", "Lua_(programming_language)",
            "Elixir_(programming_language)", "Erlang_(programming_language)", "Clojure",
            "F_Sharp_(programming_language)", "Prolog", "Assembly_language", "Algorithm",
            "Data_structure", "Object-oriented_programming", "Functional_programming", "Recursion",
            "Sorting_algorithm", "Graph_theory", "Binary_tree", "Hash_table", "Linked_list",
            "Stack_(abstract_data_type)", "Queue_(abstract_data_type)", "Big_O_notation",
            "Complexity_theory", "Compiler", "Interpreter_(computing)", "Version_control", "Git",
            "GitHub", "Software_testing", "Agile_software_development",
            "Scrum_(software_development)", "DevOps", "Continuous_integration", "HTTP", "HTTPS",
            "TCP/IP", "DNS", "REST", "GraphQL", "WebSocket", "HTML", "CSS", "Web_browser",
            "Search_engine", "API", "Database", "Relational_database", "SQL", "NoSQL", "MongoDB",
            "PostgreSQL", "MySQL", "SQLite", "Redis", "Cassandra_(database)",
            "Artificial_intelligence", "Machine_learning", "Deep_learning", "Neural_network",
            "TensorFlow", "PyTorch", "Natural_language_processing", "Computer_vision",
            "Reinforcement_learning", "Operating_system", "Linux", "Unix", "Microsoft_Windows",
            "MacOS", "Android_(operating_system)", "iOS", "Kernel_(operating_system)",
            "File_system", "Memory_management", "Process_(computing)", "Computer_security",
            "Cryptography", "Encryption", "Public-key_cryptography", "Blockchain",
            "Cryptocurrency", "Bitcoin", "Ethereum", "Cybersecurity", "Firewall_(computing)",
            "Malware", "Virus_(computer)", "Cloud_computing", "Amazon_Web_Services",
            "Docker_(software)", "Kubernetes", "Virtual_machine", "Microservices",
            "Server_(computing)", "Load_balancing_(computing)", "Content_delivery_network",
            "React_(JavaScript_library)", "Angular_(web_framework)", "Vue.js", "Node.js",
            "Django_(web_framework)", "Flask_(web_framework)", "Spring_Framework", "Ruby_on_Rails",
            "jQuery", "Bootstrap_(front-end_framework)",
        ],
    ),
    (
        "mathematics",
        &[
            "Mathematics", "Arithmetic", "Algebra", "Geometry", "Trigonometry", "Calculus",
            "Statistics", "Probability", "Number_theory", "Natural_number", "Integer",
            "Rational_number", "Real_number", "Complex_number", "Prime_number",
            "Fibonacci_sequence", "Pi", "E_(mathematical_constant)", "Golden_ratio", "Infinity",
            "Linear_algebra", "Matrix_(mathematics)", "Vector_space",
            "Eigenvalues_and_eigenvectors", "Polynomial", "Quadratic_equation", "Linear_equation",
            "Exponential_function", "Logarithm", "Binomial_theorem", "Euclidean_geometry",
            "Triangle", "Circle", "Rectangle", "Square", "Pentagon", "Hexagon", "Sphere",
            "Cylinder", "Cone", "Pyramid_(geometry)", "Pythagorean_theorem", "Angle", "Area",
            "Volume", "Perimeter", "Surface_area", "Derivative", "Integral",
            "Differential_equation", "Limit_(mathematics)", "Infinite_series", "Taylor_series",
            "Fourier_series", "Topology", "Set_theory", "Group_theory", "Graph_theory",
            "Combinatorics", "Mathematical_logic", "Game_theory", "Chaos_theory", "Fractal",
            "Mathematical_optimization", "Numerical_analysis", "Linear_programming",
            "Differential_geometry", "Algebraic_geometry",
        ],
    ),
    (
        "science",
        &[
            "Physics", "Classical_mechanics", "Quantum_mechanics", "Relativity", "Thermodynamics",
            "Electromagnetism", "Optics", "Acoustics", "Atom", "Molecule", "Electron", "Proton",
            "Neutron", "Photon", "Energy", "Force", "Gravity", "Mass", "Velocity", "Acceleration",
            "Momentum", "Newton's_laws_of_motion", "Conservation_of_energy", "Wave", "Frequency",
            "Wavelength", "Speed_of_light", "Nuclear_physics", "Nuclear_fusion", "Nuclear_fission",
            "Particle_physics", "String_theory", "Big_Bang", "Black_hole", "Wormhole",
            "Dark_matter", "Dark_energy", "Multiverse", "Chemistry", "Organic_chemistry",
            "Inorganic_chemistry", "Physical_chemistry", "Analytical_chemistry", "Biochemistry",
            "Chemical_element", "Periodic_table", "Atom", "Molecule", "Chemical_bond",
            "Chemical_reaction", "Acid", "Base_(chemistry)", "pH", "Oxidation",
            "Reduction_(chemistry)", "Catalysis", "Polymer", "Hydrocarbon", "Alcohol_(chemistry)",
            "Carbohydrate", "Protein", "Lipid", "Nucleic_acid", "DNA", "RNA", "Enzyme",
            "Amino_acid", "Biology", "Cell_(biology)", "Genetics", "Evolution", "Ecology",
            "Molecular_biology", "Microbiology", "Botany", "Zoology", "Anatomy", "Physiology",
            "Neuroscience", "Immunology", "Natural_selection", "Gene", "Chromosome", "Mitosis",
            "Meiosis", "Photosynthesis", "Cellular_respiration", "Metabolism", "Bacteria", "Virus",
            "Fungus", "Plant", "Animal", "Mammal", "Bird", "Fish", "Reptile", "Amphibian",
            "Insect", "Ecosystem", "Food_chain", "Biodiversity", "Extinction",
            "Endangered_species", "Climate_change", "Geology", "Meteorology", "Oceanography",
            "Paleontology", "Plate_tectonics", "Earthquake", "Volcano", "Mountain",
            "Rock_(geology)", "Mineral", "Fossil", "Erosion", "Sediment", "Weather", "Climate",
            "Atmosphere_of_Earth", "Water_cycle", "Ocean", "River", "Lake", "Glacier", "Desert",
            "Forest", "Rainforest", "Tundra", "Savanna", "Biome", "Astronomy", "Solar_System",
            "Sun", "Mercury_(planet)", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus",
            "Neptune", "Moon", "Star", "Galaxy", "Milky_Way", "Universe", "Comet", "Asteroid",
            "Meteor", "Supernova", "Nebula", "Exoplanet", "Space_exploration",
            "International_Space_Station",
        ],
    ),
    (
        "history",
        &[
            "Ancient_Egypt", "Ancient_Greece", "Ancient_Rome", "Ancient_China", "Mesopotamia",
            "Persian_Empire", "Byzantine_Empire", "Maya_civilization", "Aztec", "Inca_Empire",
            "Viking_Age", "Silk_Road", "Phoenicia", "Carthage", "Troy", "Middle_Ages", "Feudalism",
            "Crusades", "Black_Death", "Hundred_Years'_War", "Byzantine_Empire",
            "Holy_Roman_Empire", "Mongol_Empire", "Ottoman_Empire", "Medieval_Europe",
            "Renaissance", "Age_of_Discovery", "Protestant_Reformation", "Scientific_Revolution",
            "Enlightenment_(philosophy)", "Age_of_Enlightenment", "Industrial_Revolution",
            "American_Revolution", "French_Revolution", "Haitian_Revolution", "Napoleonic_Wars",
            "American_Civil_War", "World_War_I", "World_War_II", "Cold_War", "Korean_War",
            "Vietnam_War", "Gulf_War", "Iraq_War", "War_in_Afghanistan_(2001–2021)",
            "Great_Depression", "New_Deal", "Civil_rights_movement", "Women's_suffrage",
            "Decolonization", "Space_Race", "Fall_of_the_Berlin_Wall", "September_11_attacks",
            "Arab_Spring", "COVID-19_pandemic", "History_of_China", "History_of_India",
            "History_of_Japan", "History_of_Africa", "History_of_Europe",
            "History_of_the_United_States", "History_of_Russia", "History_of_Latin_America",
        ],
    ),
    (
        "people",
        &[
            "Albert_Einstein", "Isaac_Newton", "Galileo_Galilei", "Charles_Darwin", "Marie_Curie",
            "Nikola_Tesla", "Thomas_Edison", "Stephen_Hawking", "Richard_Feynman", "Carl_Sagan",
            "Neil_deGrasse_Tyson", "Aristotle", "Archimedes", "Leonardo_da_Vinci",
            "Johannes_Kepler", "Nicolaus_Copernicus", "Michael_Faraday", "James_Clerk_Maxwell",
            "Ernest_Rutherford", "Niels_Bohr", "Werner_Heisenberg", "Erwin_Schrödinger",
            "Paul_Dirac", "Pythagoras", "Euclid", "Alan_Turing", "John_von_Neumann", "Kurt_Gödel",
            "Leonhard_Euler", "Carl_Friedrich_Gauss", "Pierre_de_Fermat", "Blaise_Pascal",
            "René_Descartes", "Alexander_Graham_Bell", "Wright_brothers", "Henry_Ford",
            "Steve_Jobs", "Bill_Gates", "Elon_Musk", "Jeff_Bezos", "Mark_Zuckerberg",
            "Tim_Berners-Lee", "Linus_Torvalds", "Guido_van_Rossum", "Dennis_Ritchie",
            "Ken_Thompson", "Richard_Stallman", "Grace_Hopper", "George_Washington",
            "Thomas_Jefferson", "Abraham_Lincoln", "Franklin_D._Roosevelt", "John_F._Kennedy",
            "Winston_Churchill", "Napoleon", "Julius_Caesar", "Alexander_the_Great",
            "Genghis_Khan", "Cleopatra", "Queen_Victoria", "Catherine_the_Great", "Mahatma_Gandhi",
            "Nelson_Mandela", "Martin_Luther_King_Jr.", "Malcolm_X", "Rosa_Parks",
            "Harriet_Tubman", "Adolf_Hitler", "Joseph_Stalin", "Mao_Zedong", "Vladimir_Lenin",
            "Fidel_Castro", "Che_Guevara", "Socrates", "Plato", "Aristotle", "Confucius", "Buddha",
            "Lao_Tzu", "Sun_Tzu", "Marcus_Aurelius", "Seneca_the_Younger", "Augustine_of_Hippo",
            "Thomas_Aquinas", "René_Descartes", "Immanuel_Kant", "Friedrich_Nietzsche",
            "Karl_Marx", "Sigmund_Freud", "Carl_Jung", "Jean-Paul_Sartre", "William_Shakespeare",
            "Leo_Tolstoy", "Fyodor_Dostoevsky", "Charles_Dickens", "Jane_Austen", "Mark_Twain",
            "Ernest_Hemingway", "F._Scott_Fitzgerald", "George_Orwell", "J._R._R._Tolkien",
            "C._S._Lewis", "Edgar_Allan_Poe", "Pablo_Picasso", "Vincent_van_Gogh",
            "Leonardo_da_Vinci", "Michelangelo", "Rembrandt", "Claude_Monet",
            "Ludwig_van_Beethoven", "Wolfgang_Amadeus_Mozart", "Johann_Sebastian_Bach",
            "Bob_Dylan", "The_Beatles", "Jesus", "Moses", "Muhammad", "Abraham", "Buddha",
            "Confucius", "Martin_Luther", "John_Calvin", "Dalai_Lama",
        ],
    ),
    (
        "geography",
        &[
            "Africa", "Antarctica", "Asia", "Europe", "North_America", "South_America",
            "Australia", "Oceania", "Middle_East", "Caribbean", "Central_America",
            "Southeast_Asia", "United_States", "China", "India", "Russia", "Japan", "Germany",
            "United_Kingdom", "France", "Italy", "Spain", "Canada", "Australia", "Brazil",
            "Mexico", "Argentina", "South_Africa", "Egypt", "Nigeria", "Kenya", "Ethiopia",
            "Saudi_Arabia", "Iran", "Iraq", "Turkey", "Israel", "South_Korea", "North_Korea",
            "Thailand", "Vietnam", "Indonesia", "Philippines", "Pakistan", "Bangladesh", "Poland",
            "Ukraine", "Sweden", "Norway", "Greece", "New_York_City", "Los_Angeles", "London",
            "Paris", "Tokyo", "Beijing", "Shanghai", "Moscow", "Mumbai", "São_Paulo",
            "Mexico_City", "Cairo", "Istanbul", "Rome", "Athens", "Jerusalem", "Mecca",
            "Singapore", "Hong_Kong", "Dubai", "Pacific_Ocean", "Atlantic_Ocean", "Indian_Ocean",
            "Arctic_Ocean", "Mediterranean_Sea", "Caribbean_Sea", "Red_Sea", "Amazon_River",
            "Nile", "Mississippi_River", "Yangtze", "Ganges", "Rhine", "Danube", "Thames",
            "Mount_Everest", "Himalayas", "Alps", "Andes", "Rockies", "Sahara",
            "Amazon_rainforest", "Great_Barrier_Reef", "Grand_Canyon", "Niagara_Falls",
            "Victoria_Falls",
        ],
    ),
    (
        "health",
        &[
            "First_aid", "Cardiopulmonary_resuscitation", "Heimlich_maneuver",
            "Shock_(circulatory)", "Burns", "Bone_fracture", "Wound", "Hemorrhage", "Tourniquet",
            "Bandage", "Splint_(medicine)", "Hypothermia", "Hyperthermia", "Heat_stroke",
            "Heat_exhaustion", "Frostbite", "Sunburn", "Dehydration", "Altitude_sickness",
            "Poison", "Snake_bite", "Spider_bite", "Insect_bites_and_stings", "Food_poisoning",
            "Carbon_monoxide_poisoning", "Infection", "Fever", "Influenza", "Common_cold",
            "Pneumonia", "Tuberculosis", "Malaria", "Cholera", "Typhoid_fever", "COVID-19",
            "HIV/AIDS", "Ebola", "Measles", "Smallpox", "Cancer", "Heart_disease", "Stroke",
            "Diabetes_mellitus", "Hypertension", "Asthma", "Allergies", "Epilepsy",
            "Alzheimer's_disease", "Parkinson's_disease", "Depression_(mood)", "Anxiety",
            "Post-traumatic_stress_disorder", "Schizophrenia", "Autism", "Bipolar_disorder",
            "Human_body", "Skeletal_system", "Muscular_system", "Circulatory_system",
            "Respiratory_system", "Digestive_system", "Nervous_system", "Immune_system",
            "Endocrine_system", "Heart", "Lung", "Brain", "Liver", "Kidney", "Stomach", "Bone",
            "Muscle", "Blood", "Skin", "Eye", "Ear", "Nose", "Medicine", "Antibiotic", "Vaccine",
            "Surgery", "Anesthesia", "X-ray", "CT_scan", "MRI", "Ultrasound", "Blood_test",
            "Physical_therapy", "Chemotherapy", "Radiation_therapy", "Organ_transplantation",
            "Prosthesis", "Nutrition", "Vitamin", "Mineral_(nutrient)", "Protein", "Carbohydrate",
            "Fat", "Dietary_fiber", "Water", "Physical_fitness", "Exercise", "Aerobic_exercise",
            "Strength_training", "Yoga", "Meditation", "Sleep",
        ],
    ),
    (
        "technology",
        &[
            "Computer", "Personal_computer", "Laptop", "Tablet_computer", "Smartphone",
            "Central_processing_unit", "Graphics_processing_unit", "Random-access_memory",
            "Hard_disk_drive", "Solid-state_drive", "Motherboard", "Keyboard_(computing)",
            "Computer_mouse", "Computer_monitor", "Printer_(computing)", "Scanner", "Internet",
            "World_Wide_Web", "Email", "Social_media", "Facebook", "Twitter", "Instagram",
            "YouTube", "Wikipedia", "Wi-Fi", "Bluetooth", "5G", "Fiber-optic_communication",
            "Telephone", "Mobile_phone", "Television", "Radio", "Satellite", "GPS", "Podcast",
            "Electricity", "Electric_current", "Voltage", "Resistance_(electricity)", "Circuit",
            "Transistor", "Diode", "Capacitor", "Resistor", "Integrated_circuit", "Microprocessor",
            "Semiconductor", "LED", "Laser", "Battery_(electricity)", "Solar_cell", "Energy",
            "Renewable_energy", "Solar_energy", "Wind_power", "Hydroelectricity", "Nuclear_power",
            "Fossil_fuel", "Coal", "Petroleum", "Natural_gas", "Electric_vehicle",
            "Internal_combustion_engine", "Steam_engine", "Artificial_intelligence", "Robotics",
            "Nanotechnology", "Biotechnology", "3D_printing", "Virtual_reality",
            "Augmented_reality", "Quantum_computing", "CRISPR", "Automobile", "Motorcycle",
            "Bicycle", "Train", "Airplane", "Helicopter", "Submarine", "Ship", "Rocket",
            "Space_Shuttle", "Steel", "Aluminum", "Copper", "Plastic", "Rubber", "Glass",
            "Concrete", "Wood", "Paper", "Textile",
        ],
    ),
    (
        "animals",
        &[
            "Dog", "Cat", "Horse", "Cow", "Pig", "Sheep", "Goat", "Elephant", "Lion", "Tiger",
            "Leopard", "Cheetah", "Bear", "Wolf", "Fox", "Deer", "Moose", "Elk", "Rabbit",
            "Squirrel", "Rat", "Mouse", "Bat", "Whale", "Dolphin", "Seal", "Sea_lion", "Walrus",
            "Monkey", "Gorilla", "Chimpanzee", "Orangutan", "Giraffe", "Zebra", "Hippopotamus",
            "Rhinoceros", "Kangaroo", "Koala", "Panda", "Polar_bear", "Eagle", "Hawk", "Owl",
            "Crow", "Raven", "Parrot", "Penguin", "Ostrich", "Emu", "Peacock", "Swan", "Duck",
            "Goose", "Chicken", "Turkey", "Pigeon", "Hummingbird", "Woodpecker", "Flamingo",
            "Snake", "Lizard", "Turtle", "Tortoise", "Crocodile", "Alligator", "Iguana", "Gecko",
            "Chameleon", "Frog", "Toad", "Salamander", "Shark", "Whale_shark", "Great_white_shark",
            "Salmon", "Tuna", "Goldfish", "Catfish", "Bass", "Jellyfish", "Octopus", "Squid",
            "Crab", "Lobster", "Starfish", "Sea_urchin", "Coral", "Clam", "Oyster", "Ant", "Bee",
            "Wasp", "Butterfly", "Moth", "Beetle", "Ladybug", "Dragonfly", "Mosquito", "Fly",
            "Spider", "Scorpion", "Tick", "Termite", "Grasshopper",
        ],
    ),
    (
        "plants",
        &[
            "Oak", "Pine", "Maple", "Birch", "Willow", "Elm", "Cedar", "Sequoia", "Redwood",
            "Baobab", "Bamboo", "Palm_tree", "Coconut", "Banana", "Rose", "Tulip", "Sunflower",
            "Daisy", "Lily", "Orchid", "Carnation", "Chrysanthemum", "Lavender", "Wheat", "Rice",
            "Corn", "Barley", "Oat", "Rye", "Potato", "Tomato", "Carrot", "Onion", "Garlic",
            "Lettuce", "Cabbage", "Broccoli", "Cauliflower", "Apple", "Orange", "Lemon", "Grape",
            "Strawberry", "Blueberry", "Coffee", "Tea", "Cocoa_bean", "Soybean", "Peanut",
            "Almond", "Walnut", "Cactus", "Fern", "Moss", "Algae", "Mushroom", "Seaweed", "Kelp",
            "Grass", "Ivy", "Vine", "Venus_flytrap", "Succulent_plant",
        ],
    ),
    (
        "philosophy",
        &[
            "Philosophy", "Ethics", "Metaphysics", "Epistemology", "Logic", "Aesthetics",
            "Political_philosophy", "Philosophy_of_mind", "Philosophy_of_science",
            "Existentialism", "Stoicism", "Utilitarianism", "Pragmatism", "Rationalism",
            "Empiricism", "Idealism", "Materialism", "Phenomenology", "Nihilism", "Absurdism",
            "Free_will", "Consciousness", "Truth", "Beauty", "Justice", "Morality",
            "Good_and_evil",
        ],
    ),
    (
        "engineering",
        &[
            "Engineering", "Civil_engineering", "Mechanical_engineering", "Electrical_engineering",
            "Chemical_engineering", "Aerospace_engineering", "Computer_engineering",
            "Biomedical_engineering", "Environmental_engineering", "Bridge", "Dam", "Tunnel",
            "Skyscraper", "Road", "Railroad", "Canal", "Aqueduct", "Lever", "Wheel", "Pulley",
            "Gear", "Spring_(device)", "Bearing_(mechanical)",
        ],
    ),
];
