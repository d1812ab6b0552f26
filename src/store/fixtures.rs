//! Fixture content set for the Cordia site.
//!
//! Used to populate the in-memory store at construction and, optionally, to
//! seed an empty SQLite database (`storage.seed = true`).

use super::{Initiative, NewsArticle, ResearchPaper};
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("fixture dates are valid")
}

/// The three sample research papers.
pub fn research_papers() -> Vec<ResearchPaper> {
    vec![
        ResearchPaper {
            id: "1".into(),
            title: "Advancements in Cardiac Care".into(),
            description: "Comprehensive analysis of emerging cardiac treatment methodologies"
                .into(),
            content: "This research paper explores the latest developments in cardiac care, \
                      including minimally invasive procedures, advanced diagnostic techniques, \
                      and patient outcome improvements. The study presents findings from a \
                      multi-center clinical trial involving over 1,000 patients."
                .into(),
            published_date: date(2023, 1, 15),
            views: 1200,
            downloads: 85,
            author: "Dr. Sarah Johnson, MD".into(),
        },
        ResearchPaper {
            id: "2".into(),
            title: "Innovations in Heart Surgery".into(),
            description: "Revolutionary surgical techniques and patient outcomes".into(),
            content: "This paper examines breakthrough surgical techniques in cardiac surgery, \
                      focusing on robotic-assisted procedures and their impact on patient \
                      recovery times and surgical precision."
                .into(),
            published_date: date(2023, 2, 20),
            views: 1500,
            downloads: 92,
            author: "Dr. Michael Chen, MD".into(),
        },
        ResearchPaper {
            id: "3".into(),
            title: "Cardiovascular Disease Prevention".into(),
            description: "Preventive strategies and community health initiatives".into(),
            content: "A comprehensive study on cardiovascular disease prevention strategies, \
                      examining the effectiveness of community-based health programs and \
                      lifestyle interventions."
                .into(),
            published_date: date(2023, 3, 25),
            views: 1800,
            downloads: 76,
            author: "Dr. Emily Rodriguez, PhD".into(),
        },
    ]
}

/// The ten sample news articles.
pub fn news_articles() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: "1".into(),
            title: "CordiaEC Announces Strategic Partnership with Tech Innovators".into(),
            excerpt: "CordiaEC has formed a strategic alliance with leading tech innovators to \
                      enhance its product offerings and expand its market reach."
                .into(),
            content: "CordiaEC today announced a groundbreaking strategic partnership with \
                      several leading technology innovators to enhance its product offerings \
                      and expand its global market reach. This collaboration will focus on \
                      developing next-generation solutions for healthcare, sustainable energy, \
                      and digital transformation initiatives."
                .into(),
            published_date: date(2024, 1, 15),
            image_url: Some(
                "https://images.unsplash.com/photo-1557804506-669a67965ba0?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
        },
        NewsArticle {
            id: "2".into(),
            title: "CordiaEC Launches New Suite of AI-Powered Solutions".into(),
            excerpt: "CordiaEC has introduced a new suite of AI-powered solutions designed to \
                      help businesses optimize their operations and drive growth."
                .into(),
            content: "CordiaEC has unveiled its latest suite of artificial intelligence-powered \
                      solutions designed to revolutionize how businesses operate and compete in \
                      the global marketplace. These innovative tools leverage machine learning \
                      and advanced analytics to provide unprecedented insights and automation \
                      capabilities."
                .into(),
            published_date: date(2024, 1, 10),
            image_url: Some(
                "https://images.unsplash.com/photo-1677442136019-21780ecad995?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
        },
        NewsArticle {
            id: "3".into(),
            title: "CordiaEC Recognized as Industry Leader in Cloud Computing".into(),
            excerpt: "CordiaEC has been recognized as an industry leader in cloud computing, \
                      earning accolades for its innovative solutions and customer satisfaction."
                .into(),
            content: "CordiaEC has received prestigious industry recognition as a leader in \
                      cloud computing solutions, highlighting the company's commitment to \
                      innovation, customer satisfaction, and technological excellence. The \
                      award recognizes CordiaEC's significant contributions to advancing cloud \
                      infrastructure and services."
                .into(),
            published_date: date(2024, 1, 5),
            image_url: None,
        },
        NewsArticle {
            id: "4".into(),
            title: "Global Expansion: CordiaEC Opens New Offices in Europe".into(),
            excerpt: "CordiaEC continues its global expansion with new offices in London, \
                      Berlin, and Paris to better serve European clients."
                .into(),
            content: "CordiaEC announced the opening of three new European offices in London, \
                      Berlin, and Paris as part of its strategic global expansion initiative. \
                      These new locations will enhance CordiaEC's ability to serve European \
                      clients and partners, providing localized support and strengthening the \
                      company's presence in key European markets."
                .into(),
            published_date: date(2023, 12, 20),
            image_url: Some(
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
        },
        NewsArticle {
            id: "5".into(),
            title: "CordiaEC Launches Sustainability Initiative".into(),
            excerpt: "CordiaEC commits to environmental sustainability with new green \
                      technology initiatives and carbon neutrality goals."
                .into(),
            content: "CordiaEC has launched a comprehensive sustainability initiative aimed at \
                      achieving carbon neutrality by 2025. The program includes investments in \
                      green technology, renewable energy adoption, and sustainable business \
                      practices across all operations. This commitment reflects CordiaEC's \
                      dedication to environmental responsibility and sustainable business \
                      growth."
                .into(),
            published_date: date(2023, 12, 15),
            image_url: Some(
                "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
        },
        NewsArticle {
            id: "6".into(),
            title: "CordiaEC Wins Innovation Award at Tech Conference".into(),
            excerpt: "CordiaEC's groundbreaking technology solutions earned recognition at the \
                      prestigious Global Tech Innovation Conference."
                .into(),
            content: "CordiaEC was honored with the Innovation Excellence Award at the Global \
                      Tech Innovation Conference for its revolutionary approach to digital \
                      transformation solutions. The award recognizes CordiaEC's pioneering work \
                      in developing next-generation technology platforms that help businesses \
                      adapt to the rapidly evolving digital landscape."
                .into(),
            published_date: date(2023, 12, 10),
            image_url: None,
        },
        NewsArticle {
            id: "7".into(),
            title: "New Research and Development Center Opens".into(),
            excerpt: "CordiaEC inaugurates state-of-the-art R&D facility to accelerate \
                      innovation in emerging technologies."
                .into(),
            content: "CordiaEC has officially opened its new state-of-the-art Research and \
                      Development center, equipped with cutting-edge laboratories and \
                      collaborative spaces designed to accelerate innovation in artificial \
                      intelligence, machine learning, and emerging technologies. The facility \
                      will house over 200 researchers and engineers working on next-generation \
                      solutions."
                .into(),
            published_date: date(2023, 12, 5),
            image_url: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
        },
        NewsArticle {
            id: "8".into(),
            title: "CordiaEC Partners with Leading Universities".into(),
            excerpt: "Strategic partnerships with top universities worldwide to advance \
                      research and develop next-generation talent."
                .into(),
            content: "CordiaEC announced strategic partnerships with leading universities \
                      across the globe to advance cutting-edge research and develop the next \
                      generation of technological talent. These collaborations will focus on \
                      joint research projects, student exchange programs, and the development \
                      of innovative educational curricula that prepare students for future \
                      technology challenges."
                .into(),
            published_date: date(2023, 11, 30),
            image_url: Some(
                "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
        },
        NewsArticle {
            id: "9".into(),
            title: "CordiaEC Achieves Security Certification Milestone".into(),
            excerpt: "CordiaEC earns prestigious international security certifications, \
                      reinforcing commitment to data protection and cybersecurity."
                .into(),
            content: "CordiaEC has successfully achieved multiple prestigious international \
                      security certifications, including ISO 27001 and SOC 2 Type II, \
                      reinforcing the company's unwavering commitment to data protection and \
                      cybersecurity excellence. These certifications demonstrate CordiaEC's \
                      dedication to maintaining the highest standards of information security."
                .into(),
            published_date: date(2023, 11, 25),
            image_url: None,
        },
        NewsArticle {
            id: "10".into(),
            title: "CordiaEC Hosts Annual Innovation Summit".into(),
            excerpt: "Industry leaders gather at CordiaEC's annual summit to discuss emerging \
                      technologies and future trends."
                .into(),
            content: "CordiaEC successfully hosted its annual Innovation Summit, bringing \
                      together industry leaders, technology pioneers, and visionary \
                      entrepreneurs to discuss emerging technologies and future trends. The \
                      three-day event featured keynote presentations, panel discussions, and \
                      networking opportunities that fostered collaboration and knowledge \
                      sharing across industries."
                .into(),
            published_date: date(2023, 11, 20),
            image_url: Some(
                "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
        },
    ]
}

/// The six initiatives.
pub fn initiatives() -> Vec<Initiative> {
    vec![
        Initiative {
            id: "1".into(),
            slug: "k-food".into(),
            title: "K-Food Initiative".into(),
            description: "Connecting Korean food brands with global buyers and distribution \
                          channels for international market expansion."
                .into(),
            content: "The K-Food Initiative is designed to bridge the gap between innovative \
                      Korean food brands and international markets. Our comprehensive program \
                      provides market research, regulatory compliance support, distribution \
                      channel development, and strategic partnerships to help Korean food \
                      companies successfully expand globally. We work with local distributors, \
                      retailers, and food service providers to create sustainable market entry \
                      strategies."
                .into(),
            image_url: None,
            category: "Food & Beverage".into(),
        },
        Initiative {
            id: "2".into(),
            slug: "k-beauty".into(),
            title: "K-Beauty Initiative".into(),
            description: "Empowering K-Beauty brands to certify and launch in overseas markets \
                          with comprehensive market entry support."
                .into(),
            content: "Our K-Beauty Initiative provides comprehensive support for Korean beauty \
                      brands looking to enter international markets. We offer regulatory \
                      guidance, certification support, market analysis, and partnership \
                      development to ensure successful market entry and sustainable growth in \
                      the global beauty industry."
                .into(),
            image_url: Some(
                "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
            category: "Beauty & Cosmetics".into(),
        },
        Initiative {
            id: "3".into(),
            slug: "startups".into(),
            title: "Startups Program".into(),
            description: "Mentoring and funding diaspora-led startups for global expansion \
                          with strategic partnership opportunities."
                .into(),
            content: "The Startups Program focuses on supporting diaspora-led startups with \
                      mentoring, funding opportunities, and strategic partnerships. We provide \
                      access to global networks, investor connections, and market development \
                      resources to help innovative startups scale internationally."
                .into(),
            image_url: Some(
                "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
            category: "Technology & Innovation".into(),
        },
        Initiative {
            id: "4".into(),
            slug: "vc-matching".into(),
            title: "VC Matching".into(),
            description: "Bridging innovative companies with top international venture capital \
                          for strategic investment opportunities."
                .into(),
            content: "Our VC Matching program connects innovative companies with leading \
                      international venture capital firms. We facilitate strategic investment \
                      opportunities through our extensive network of investors, providing \
                      companies with access to capital, expertise, and global market \
                      opportunities."
                .into(),
            image_url: None,
            category: "Investment & Finance".into(),
        },
        Initiative {
            id: "5".into(),
            slug: "internships".into(),
            title: "Internships Program".into(),
            description: "Offering cross-border internship opportunities for Korean diaspora \
                          youth in international organizations."
                .into(),
            content: "The Internships Program creates valuable cross-border internship \
                      opportunities for Korean diaspora youth in leading international \
                      organizations. We partner with global companies, NGOs, and government \
                      agencies to provide meaningful work experiences that build career \
                      foundations and cultural bridges."
                .into(),
            image_url: Some(
                "https://images.unsplash.com/photo-1497366216548-37526070297c?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=200"
                    .into(),
            ),
            category: "Education & Development".into(),
        },
        Initiative {
            id: "6".into(),
            slug: "forums".into(),
            title: "Knowledge Forums".into(),
            description: "Fostering knowledge exchange through online and offline seminars & \
                          forums for industry collaboration."
                .into(),
            content: "Our Knowledge Forums facilitate meaningful knowledge exchange through \
                      both online and offline seminars, conferences, and collaborative forums. \
                      These platforms bring together industry leaders, researchers, and \
                      innovators to share insights, discuss trends, and develop collaborative \
                      solutions to global challenges."
                .into(),
            image_url: None,
            category: "Knowledge & Collaboration".into(),
        },
    ]
}
