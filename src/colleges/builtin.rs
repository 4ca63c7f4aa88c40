use crate::directory::{generate_slug, DetailSource};

use super::types::{College, CollegeGuide, CollegeKind, CourseOffering, EntranceExam, Scholarship};

/// A college entry in the built-in tables.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCollege {
    pub name: &'static str,
    pub location: &'static str,
    pub kind: CollegeKind,
    pub rating: f64,
    pub fees: &'static str,
    pub total_fees: &'static str,
    pub duration: &'static str,
    pub seats: &'static str,
    pub financial_aid: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub phone: &'static str,
    pub email: &'static str,
    pub underserved: bool,
    pub scholarship_details: Option<&'static str>,
    pub exams: &'static [&'static str],
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl BuiltinCollege {
    fn to_college(self) -> College {
        College {
            name: self.name.to_string(),
            location: Some(self.location.to_string()),
            kind: self.kind,
            rating: Some(self.rating),
            annual_fees: Some(self.fees.to_string()),
            total_fees: Some(self.total_fees.to_string()),
            duration: Some(self.duration.to_string()),
            seats: Some(self.seats.to_string()),
            financial_aid: strings(self.financial_aid),
            highlights: strings(self.highlights),
            underserved_scholarships: self.underserved,
            scholarship_details: self.scholarship_details.map(str::to_string),
            phone: Some(self.phone.to_string()),
            email: Some(self.email.to_string()),
            website: None,
            courses: Vec::<CourseOffering>::new(),
            entrance_exams: strings(self.exams),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CareerColleges {
    slug: &'static str,
    /// Field of study shown as the guide title
    title: &'static str,
    colleges: &'static [BuiltinCollege],
}

const BANGALORE: &str = "Bangalore";

static CAREER_COLLEGES: [CareerColleges; 6] = [
    CareerColleges {
        slug: "civil-engineer",
        title: "Civil Engineering",
        colleges: &[
            BuiltinCollege {
                name: "Indian Institute of Science (IISc)",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.8,
                fees: "₹25,000/year",
                total_fees: "₹2.5 Lakhs total",
                duration: "4 Years",
                seats: "120",
                financial_aid: &["Free for EWS", "SC/ST Scholarships", "Merit Scholarships"],
                highlights: &["Top Research Institute", "100% Placement", "Fee Waiver Available"],
                phone: "+91-80-2293-2001",
                email: "admissions@iisc.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["JEE Advanced", "GATE", "IISc Entrance Test"],
            },
            BuiltinCollege {
                name: "National Institute of Technology (NIT) Karnataka",
                location: "Surathkal, Karnataka",
                kind: CollegeKind::Government,
                rating: 4.6,
                fees: "₹62,000/year",
                total_fees: "₹2.5 Lakhs total",
                duration: "4 Years",
                seats: "180",
                financial_aid: &["Scholarships Available", "Fee Remission for EWS", "Bank Loans Available"],
                highlights: &["NIT Status", "Government Institution", "Industry Connections"],
                phone: "+91-824-247-3050",
                email: "registrar@nitk.edu.in",
                underserved: true,
                scholarship_details: None,
                exams: &["JEE Main", "KCET", "GATE"],
            },
            BuiltinCollege {
                name: "University Visvesvaraya College of Engineering",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.4,
                fees: "₹8,000/year",
                total_fees: "₹32,000 total",
                duration: "4 Years",
                seats: "150",
                financial_aid: &["Free for EWS", "Karnataka State Scholarships", "Minority Scholarships"],
                highlights: &["Extremely Affordable", "Government College", "Strong Alumni Network"],
                phone: "+91-80-2296-1152",
                email: "principal@uvce.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["KCET", "COMEDK", "JEE Main"],
            },
            BuiltinCollege {
                name: "PES University",
                location: BANGALORE,
                kind: CollegeKind::Private,
                rating: 4.5,
                fees: "₹1,25,000/year",
                total_fees: "₹5 Lakhs total",
                duration: "4 Years",
                seats: "150",
                financial_aid: &["Merit Scholarships", "Need-based Aid", "Education Loans"],
                highlights: &["Top Engineering College", "Research Focus", "Industry Connect"],
                phone: "+91-80-2718-1000",
                email: "admissions@pes.edu",
                underserved: true,
                scholarship_details: Some(
                    "Up to 50% fee waiver for students with family income below ₹6 lakhs",
                ),
                exams: &[],
            },
        ],
    },
    CareerColleges {
        slug: "software-developer",
        title: "Software Development",
        colleges: &[
            BuiltinCollege {
                name: "University Visvesvaraya College of Engineering (CSE)",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.6,
                fees: "₹8,000/year",
                total_fees: "₹32,000 total",
                duration: "4 Years",
                seats: "180",
                financial_aid: &["Free for EWS", "Karnataka Scholarships", "Merit Awards"],
                highlights: &["Premier CS Program", "Government College", "Tech Industry Links"],
                phone: "+91-80-2296-1152",
                email: "cse@uvce.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["KCET", "COMEDK", "JEE Main"],
            },
            BuiltinCollege {
                name: "Bangalore University (Computer Science)",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.2,
                fees: "₹8,000/year",
                total_fees: "₹32,000 total",
                duration: "4 Years",
                seats: "200",
                financial_aid: &["Free for EWS", "State Scholarships", "Financial Aid"],
                highlights: &["Government University", "IT Focus", "Industry Connect"],
                phone: "+91-80-2296-1444",
                email: "cs@bangaloreuniversity.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["CUET", "Karnataka DCET", "University Entrance Test"],
            },
            BuiltinCollege {
                name: "Sir M. Visvesvaraya Institute of Technology",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.4,
                fees: "₹15,000/year",
                total_fees: "₹60,000 total",
                duration: "4 Years",
                seats: "120",
                financial_aid: &["Merit Scholarships", "Fee Concessions", "Government Support"],
                highlights: &["Autonomous College", "Strong Placement", "Government Institution"],
                phone: "+91-80-2670-2735",
                email: "principal@sirmvit.edu",
                underserved: true,
                scholarship_details: None,
                exams: &["KCET", "COMEDK", "Management Quota"],
            },
            BuiltinCollege {
                name: "RV College of Engineering (CSE)",
                location: BANGALORE,
                kind: CollegeKind::Private,
                rating: 4.4,
                fees: "₹1,25,000/year",
                total_fees: "₹5 Lakhs total",
                duration: "4 Years",
                seats: "180",
                financial_aid: &["Merit Scholarships", "Financial Assistance", "Tech Programs"],
                highlights: &["Autonomous College", "100% Placement", "Software Focus"],
                phone: "+91-80-6712-2222",
                email: "cse@rvce.edu.in",
                underserved: true,
                scholarship_details: Some(
                    "Financial aid program covering 40-60% fees for deserving students",
                ),
                exams: &[],
            },
        ],
    },
    CareerColleges {
        slug: "teacher",
        title: "Education & Teaching",
        colleges: &[
            BuiltinCollege {
                name: "Regional Institute of Education (RIE)",
                location: "Mysore",
                kind: CollegeKind::Government,
                rating: 4.6,
                fees: "₹2,000/year",
                total_fees: "₹8,000 total",
                duration: "4 Years (B.Ed)",
                seats: "100",
                financial_aid: &["Free for EWS", "Teaching Scholarships", "Hostel Facilities"],
                highlights: &["NCERT Affiliated", "Teacher Training", "Government Jobs Guaranteed"],
                phone: "+91-821-251-5252",
                email: "director@riemysore.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["RIE CEE", "CUET", "B.Ed Entrance Test"],
            },
            BuiltinCollege {
                name: "Karnataka State Rural Development University",
                location: "Gadag",
                kind: CollegeKind::Government,
                rating: 4.3,
                fees: "₹3,500/year",
                total_fees: "₹14,000 total",
                duration: "4 Years",
                seats: "80",
                financial_aid: &["Rural Scholarships", "SC/ST Benefits", "Free Hostel for Girls"],
                highlights: &["Rural Focus", "Government University", "Teaching Opportunities"],
                phone: "+91-8372-263-123",
                email: "registrar@ksrdu.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["KSRDU Entrance Test", "State CET", "Merit-based Admission"],
            },
            BuiltinCollege {
                name: "Bangalore University (Education)",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.4,
                fees: "₹5,000/year",
                total_fees: "₹20,000 total",
                duration: "4 Years",
                seats: "120",
                financial_aid: &["Free for EWS", "Merit Scholarships", "Education Loans"],
                highlights: &["Teacher Training", "Government Recognition", "Placement Support"],
                phone: "+91-80-2296-1444",
                email: "education@bangaloreuniversity.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["CUET", "Karnataka B.Ed CET", "University Entrance Test"],
            },
            BuiltinCollege {
                name: "Christ University (Education)",
                location: BANGALORE,
                kind: CollegeKind::Private,
                rating: 4.5,
                fees: "₹75,000/year",
                total_fees: "₹3 Lakhs total",
                duration: "4 Years (B.Ed)",
                seats: "80",
                financial_aid: &["Need-based Scholarships", "Merit Awards", "Teacher Training Grants"],
                highlights: &["Modern Teacher Training", "Industry Connect", "Research Programs"],
                phone: "+91-80-4012-9292",
                email: "education@christuniversity.in",
                underserved: true,
                scholarship_details: Some("Up to 60% fee waiver for rural students and EWS category"),
                exams: &[],
            },
        ],
    },
    CareerColleges {
        slug: "graphic-designer",
        title: "Graphic Design",
        colleges: &[
            BuiltinCollege {
                name: "College of Fine Arts, Bangalore University",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.2,
                fees: "₹4,000/year",
                total_fees: "₹16,000 total",
                duration: "4 Years (BFA)",
                seats: "80",
                financial_aid: &["Free for EWS", "SC/ST Scholarships", "Merit Scholarships"],
                highlights: &["Government Arts College", "Industry Connect", "Affordable Fees"],
                phone: "+91-80-2296-1444",
                email: "finearts@bangaloreuniversity.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["CUET", "Karnataka Arts CET", "University Entrance Test"],
            },
            BuiltinCollege {
                name: "Government College of Arts and Crafts",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.0,
                fees: "₹3,500/year",
                total_fees: "₹14,000 total",
                duration: "4 Years",
                seats: "60",
                financial_aid: &["Free for EWS", "State Scholarships", "Financial Aid"],
                highlights: &["Historic Arts Institution", "Traditional & Digital Art", "Low Fees"],
                phone: "+91-80-2286-4429",
                email: "info@gcac.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["State Arts Entrance", "CUET", "Portfolio Assessment"],
            },
            BuiltinCollege {
                name: "Srishti Manipal Institute of Art, Design and Technology",
                location: BANGALORE,
                kind: CollegeKind::Private,
                rating: 4.6,
                fees: "₹2,25,000/year",
                total_fees: "₹9 Lakhs total",
                duration: "4 Years (BDes)",
                seats: "150",
                financial_aid: &["Merit Scholarships", "Need-based Aid", "Creative Grants"],
                highlights: &["Top Design School", "Industry Connect", "Creative Programs"],
                phone: "+91-80-2843-3161",
                email: "admissions@srishti.ac.in",
                underserved: true,
                scholarship_details: Some(
                    "Up to 50% scholarship for students from economically disadvantaged backgrounds",
                ),
                exams: &[],
            },
        ],
    },
    CareerColleges {
        slug: "lawyer",
        title: "Law & Legal Studies",
        colleges: &[
            BuiltinCollege {
                name: "Government Law College",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.4,
                fees: "₹3,000/year",
                total_fees: "₹15,000 total",
                duration: "5 Years (BA LLB)",
                seats: "120",
                financial_aid: &["Free for EWS", "SC/ST Scholarships", "Merit Awards"],
                highlights: &["Premier Law College", "Government Institution", "Bar Council Approved"],
                phone: "+91-80-2221-5566",
                email: "principal@glc.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["CLAT", "Karnataka PGCET Law", "KSLAT"],
            },
            BuiltinCollege {
                name: "Bangalore University Law College",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.2,
                fees: "₹4,500/year",
                total_fees: "₹22,500 total",
                duration: "5 Years",
                seats: "180",
                financial_aid: &["Free for EWS", "State Scholarships", "Legal Aid Support"],
                highlights: &["University Law College", "Government Institution", "Moot Court"],
                phone: "+91-80-2296-1444",
                email: "law@bangaloreuniversity.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["CUET", "Karnataka Law CET", "University Entrance Test"],
            },
            BuiltinCollege {
                name: "Karnataka State Law University",
                location: "Hubli (Distance Learning in Bangalore)",
                kind: CollegeKind::Government,
                rating: 4.1,
                fees: "₹8,000/year",
                total_fees: "₹40,000 total",
                duration: "5 Years",
                seats: "150",
                financial_aid: &["Distance Learning", "Fee Concessions", "State Support"],
                highlights: &["State Law University", "Flexible Learning", "Government Recognition"],
                phone: "+91-836-263-5500",
                email: "registrar@kslu.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["CLAT", "Karnataka Law CET", "KSLAT"],
            },
        ],
    },
    CareerColleges {
        slug: "accountant",
        title: "Accounting & Finance",
        colleges: &[
            BuiltinCollege {
                name: "Government College of Commerce",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.5,
                fees: "₹2,000/year",
                total_fees: "₹6,000 total",
                duration: "3 Years (B.Com)",
                seats: "180",
                financial_aid: &["Free for EWS", "Accounting Scholarships", "CA Foundation Support"],
                highlights: &["Commerce Focus", "Accounting Specialization", "Government College"],
                phone: "+91-80-2287-6644",
                email: "principal@gcc.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["Karnataka DCET", "CUET", "CA Foundation", "Merit-based Selection"],
            },
            BuiltinCollege {
                name: "Bangalore University (B.Com - Accounting)",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.3,
                fees: "₹2,800/year",
                total_fees: "₹8,400 total",
                duration: "3 Years",
                seats: "220",
                financial_aid: &["Free for EWS", "Merit Scholarships", "Professional Course Support"],
                highlights: &["Government University", "Accounting Focus", "Professional Training"],
                phone: "+91-80-2296-1444",
                email: "accounting@bangaloreuniversity.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["CUET", "Karnataka CET", "University Entrance Test"],
            },
            BuiltinCollege {
                name: "Government First Grade College (Accounting & Finance)",
                location: BANGALORE,
                kind: CollegeKind::Government,
                rating: 4.1,
                fees: "₹2,200/year",
                total_fees: "₹6,600 total",
                duration: "3 Years",
                seats: "160",
                financial_aid: &["Free for EWS", "CA/CMA Support", "State Scholarships"],
                highlights: &["Accounting Specialization", "Professional Course Preparation", "Government Support"],
                phone: "+91-80-2287-7788",
                email: "accounting@gfgcblr.ac.in",
                underserved: true,
                scholarship_details: None,
                exams: &["Karnataka DCET", "State CET", "Merit-based Admission"],
            },
        ],
    },
];

static EXAMS: [BuiltinExam; 9] = [
    BuiltinExam {
        name: "JEE Main",
        full_name: "Joint Entrance Examination (Main)",
        description: "The national engineering entrance exam for NITs and other central institutions, and the qualifier for JEE Advanced.",
        eligibility: &[
            "Minimum 75% in 12th (65% for SC/ST)",
            "PCM (Physics, Chemistry, Mathematics) mandatory",
        ],
        pattern: "Online, 3 hours; Physics, Chemistry, Mathematics; 300 marks",
        dates: "Registration December - January; exams January and April",
        website: "https://jeemain.nta.nic.in",
    },
    BuiltinExam {
        name: "KCET",
        full_name: "Karnataka Common Entrance Test",
        description: "State exam for engineering, pharmacy and architecture seats in Karnataka.",
        eligibility: &[
            "12th pass with required subjects",
            "Karnataka domicile required",
            "Minimum 45% aggregate",
        ],
        pattern: "Pen and paper; Physics, Chemistry, Mathematics, Biology; 180 marks",
        dates: "Registration February - March; exam April - May",
        website: "https://kea.kar.nic.in",
    },
    BuiltinExam {
        name: "NEET UG",
        full_name: "National Eligibility cum Entrance Test - Undergraduate",
        description: "The single entrance exam for MBBS, BDS and other medical courses in India.",
        eligibility: &[
            "Minimum 50% in PCB (40% for SC/ST/OBC)",
            "Physics, Chemistry, Biology mandatory",
        ],
        pattern: "Pen and paper, 3 hours 20 minutes; Physics, Chemistry, Biology; 720 marks",
        dates: "Registration February - March; exam in May",
        website: "https://neet.nta.nic.in",
    },
    BuiltinExam {
        name: "NATA",
        full_name: "National Aptitude Test in Architecture",
        description: "Entrance test for B.Arch programs in India.",
        eligibility: &["12th pass with 50% in PCM", "Mathematics compulsory"],
        pattern: "Online plus drawing test, 3 hours; Mathematics, General Aptitude, Drawing; 200 marks",
        dates: "Registration February - March; exams April and July",
        website: "https://nata.in",
    },
    BuiltinExam {
        name: "CLAT",
        full_name: "Common Law Admission Test",
        description: "National entrance exam for law programs at the National Law Universities.",
        eligibility: &[
            "Minimum 45% in 12th (40% for SC/ST)",
            "Any stream (Science/Commerce/Arts)",
        ],
        pattern: "Online, 2 hours; English, Current Affairs, Legal and Logical Reasoning, Quantitative Techniques; 150 marks",
        dates: "Registration December - January; exam in May",
        website: "https://consortiumofnlus.ac.in",
    },
    BuiltinExam {
        name: "CUET",
        full_name: "Common University Entrance Test",
        description: "NTA exam for undergraduate and postgraduate admission to central universities.",
        eligibility: &["Minimum 50% in 12th for UG courses", "Any stream acceptable"],
        pattern: "Online, 2 hours per session; General Test, Domain Specific Test, Language Test",
        dates: "Registration March - May; exams July - August",
        website: "https://cuet.samarth.ac.in",
    },
    BuiltinExam {
        name: "GATE",
        full_name: "Graduate Aptitude Test in Engineering",
        description: "Exam for postgraduate engineering admission and PSU recruitment.",
        eligibility: &[
            "Bachelor's degree in Engineering/Technology",
            "Final year students can apply",
        ],
        pattern: "Online, 3 hours; technical subject, General Aptitude, Engineering Mathematics; 100 marks",
        dates: "Registration August - September; exam in February",
        website: "https://gate.iitb.ac.in",
    },
    BuiltinExam {
        name: "Karnataka DCET",
        full_name: "Karnataka Diploma Common Entrance Test",
        description: "Lateral entry into engineering courses for diploma holders.",
        eligibility: &[
            "Diploma in Engineering/Technology",
            "Karnataka domicile required",
            "Minimum 45% in diploma",
        ],
        pattern: "Pen and paper, 3 hours; Mathematics, Physics, Chemistry; 180 marks",
        dates: "Registration May - June; exam in July",
        website: "https://kea.kar.nic.in",
    },
    BuiltinExam {
        name: "JAM",
        full_name: "Joint Admission Test for Masters",
        description: "Entrance exam for postgraduate science programs at IITs and other institutes.",
        eligibility: &["Bachelor's degree in relevant subject", "Final year students can apply"],
        pattern: "Online, 3 hours; multiple choice and numerical answers; 100 marks",
        dates: "Registration September - October; exam in February",
        website: "https://jam.iitb.ac.in",
    },
];

#[derive(Debug, Clone, Copy)]
struct BuiltinExam {
    name: &'static str,
    full_name: &'static str,
    description: &'static str,
    eligibility: &'static [&'static str],
    pattern: &'static str,
    dates: &'static str,
    website: &'static str,
}

impl BuiltinExam {
    fn to_exam(self) -> EntranceExam {
        EntranceExam {
            name: self.name.to_string(),
            full_name: Some(self.full_name.to_string()),
            description: Some(self.description.to_string()),
            eligibility: strings(self.eligibility),
            exam_pattern: Some(self.pattern.to_string()),
            difficulty_level: None,
            exam_dates: Some(self.dates.to_string()),
            official_website: Some(self.website.to_string()),
        }
    }
}

static SCHOLARSHIPS: [Scholarship; 5] = [
    Scholarship {
        name: "National Scholarship Portal - SC/ST Pre-Matric",
        provider: "Ministry of Education",
        amount: "₹1,000-3,000/month",
        eligibility: "SC/ST students, Class 9-12",
        deadline: "October 31",
        description: "Financial support for SC/ST students covering tuition, books and living expenses",
        link: "https://scholarships.gov.in",
        highlight: "100% Fee Coverage",
    },
    Scholarship {
        name: "National Scholarship Portal - OBC Post-Matric",
        provider: "Ministry of Education",
        amount: "₹2,000-5,000/month + Full Fees",
        eligibility: "OBC students, Family income < ₹8 Lakhs",
        deadline: "December 15",
        description: "Full tuition plus a monthly stipend for OBC students in higher education",
        link: "https://scholarships.gov.in",
        highlight: "Living Allowance Included",
    },
    Scholarship {
        name: "Karnataka State EWS Scholarship",
        provider: "Karnataka Government",
        amount: "Full Fee Waiver + ₹2,000/month",
        eligibility: "EWS Certificate holders, All categories",
        deadline: "Throughout the year",
        description: "Fee waiver for Economically Weaker Section students in Karnataka",
        link: "https://ssp.postmatric.karnataka.gov.in",
        highlight: "No Fee Required",
    },
    Scholarship {
        name: "Central Sector Scholarship Scheme",
        provider: "Ministry of Education",
        amount: "₹20,000/year",
        eligibility: "Top 2% in Class 12, Family income < ₹8 Lakhs",
        deadline: "November 30",
        description: "Merit-cum-means scholarship for students from low-income families",
        link: "https://scholarships.gov.in",
        highlight: "Merit Based",
    },
    Scholarship {
        name: "Minority Community Scholarship",
        provider: "Ministry of Minority Affairs",
        amount: "₹3,800-8,000/month",
        eligibility: "Muslim, Christian, Sikh, Buddhist, Jain, Parsi students",
        deadline: "January 31",
        description: "Educational support for students from minority communities",
        link: "https://scholarships.gov.in",
        highlight: "Community Support",
    },
];

static AID_NOTES: [(&str, &str); 6] = [
    ("EWS", "Economically Weaker Section: family income below ₹8 lakh a year can qualify for a full fee waiver."),
    ("SC/ST", "Scheduled Castes/Scheduled Tribes: government support for students from these communities."),
    ("Post-Matric", "Support from class 11 onwards, through higher education."),
    ("GATE Scholarship", "Stipend for M.Tech/PhD students who qualify through GATE."),
    ("CA Foundation", "First level of the Chartered Accountancy course."),
    ("Distance Learning", "Study from home with occasional contact classes."),
];

/// Scholarship schemes shown with every college guide
pub fn scholarships() -> &'static [Scholarship] {
    &SCHOLARSHIPS
}

/// Plain-language explanation for a financial-aid label, if one applies
pub fn aid_note(aid: &str) -> Option<(&'static str, &'static str)> {
    AID_NOTES.iter().copied().find(|(term, _)| aid.contains(term))
}

/// Look up an exam by name. Matching ignores case and punctuation, and
/// the full name works too ("Common Law Admission Test").
pub fn builtin_exam(name: &str) -> Option<EntranceExam> {
    let wanted = generate_slug(name);
    if wanted.is_empty() {
        return None;
    }
    EXAMS
        .iter()
        .find(|exam| generate_slug(exam.name) == wanted || generate_slug(exam.full_name) == wanted)
        .map(|exam| exam.to_exam())
}

/// Careers that have a built-in college list, by slug
pub fn builtin_college_careers() -> impl Iterator<Item = &'static str> {
    CAREER_COLLEGES.iter().map(|c| c.slug)
}

/// Built-in guide for a career slug
pub fn builtin_guide(slug: &str) -> Option<CollegeGuide> {
    let entry = CAREER_COLLEGES.iter().find(|c| c.slug == slug)?;
    let colleges: Vec<College> = entry.colleges.iter().map(|c| c.to_college()).collect();

    // Every exam any listed college accepts, first mention first
    let mut exams: Vec<EntranceExam> = Vec::new();
    for name in colleges.iter().flat_map(|c| c.entrance_exams.iter()) {
        if exams.iter().any(|e| e.name == *name) {
            continue;
        }
        exams.push(builtin_exam(name).unwrap_or_else(|| EntranceExam::named(name)));
    }

    Some(CollegeGuide {
        career_slug: entry.slug.to_string(),
        career_title: entry.title.to_string(),
        colleges,
        exams,
        scholarships: scholarships().to_vec(),
        source: DetailSource::Builtin,
    })
}
